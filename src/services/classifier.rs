/// 投瓶事件的可疑行为判定, 在状态落库前求值的可插拔谓词。
pub trait InsertionClassifier: Send + Sync {
    /// 判定一次投瓶是否可疑; 返回 Some(原因) 表示可疑。
    fn classify(&self, rfid: &str, sensor_data: Option<&serde_json::Value>) -> Option<String>;
}

/// 当前实现不标记任何事件。
/// 欺诈启发式（如单账户单位时间投瓶速率）尚无产品定义,
/// 接入真实规则时替换此实现即可, 摄入路径不变。
#[derive(Clone, Copy, Default)]
pub struct NoopClassifier;

impl InsertionClassifier for NoopClassifier {
    fn classify(&self, _rfid: &str, _sensor_data: Option<&serde_json::Value>) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_classifier_flags_nothing() {
        let classifier = NoopClassifier;
        assert!(classifier.classify("RFID1", None).is_none());
        assert!(
            classifier
                .classify("RFID1", Some(&serde_json::json!({"sensor_value": 97})))
                .is_none()
        );
    }
}
