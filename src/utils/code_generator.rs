use rand::Rng;

/// 兑换码字符表: 32 个符号, 去掉易混淆的 0/O/1/I
const REDEMPTION_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成8位兑换码
pub fn generate_redemption_code() -> String {
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| REDEMPTION_ALPHABET[rng.gen_range(0..REDEMPTION_ALPHABET.len())] as char)
        .collect()
}

/// 生成会话令牌（32 字节随机数的十六进制表示）
pub fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redemption_code_shape() {
        let code = generate_redemption_code();
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|c| REDEMPTION_ALPHABET.contains(&c)));
    }

    #[test]
    fn test_redemption_code_excludes_ambiguous_chars() {
        assert_eq!(REDEMPTION_ALPHABET.len(), 32);
        for c in [b'0', b'O', b'1', b'I'] {
            assert!(!REDEMPTION_ALPHABET.contains(&c));
        }
    }

    #[test]
    fn test_session_token_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_tokens_are_different() {
        // 理论上可能相同，但概率可以忽略
        assert_ne!(generate_session_token(), generate_session_token());
    }
}
