use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机编码（剔除易混淆字符）
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

/// 按年份生成学号，例如 `CP26-7F3KQ2`
pub fn generate_matric_no(year: i32) -> String {
    format!("CP{}-{}", year % 100, generate_random_code(6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_random_code(8).len(), 8);
        assert_eq!(generate_random_code(0).len(), 0);
    }

    #[test]
    fn test_code_charset() {
        let code = generate_random_code(64);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_matric_no_format() {
        let matric = generate_matric_no(2026);
        assert!(matric.starts_with("CP26-"));
        assert_eq!(matric.len(), 11);
    }
}
