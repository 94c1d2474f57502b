use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证SIM卡号格式（ICCID风格，10-20位数字）
pub fn validate_sim_number(sim_number: &str) -> AppResult<()> {
    let sim_regex = Regex::new(r"^\d{10,20}$").unwrap();

    if !sim_regex.is_match(sim_number) {
        return Err(AppError::ValidationError(
            "SIM number must be 10-20 digits".to_string(),
        ));
    }

    Ok(())
}

/// 规范化SIM卡号：去除粘贴时带入的空格和连字符
pub fn normalize_sim_number(sim_number: &str) -> String {
    sim_number.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sim_number() {
        assert!(validate_sim_number("8991000912345678").is_ok());
        assert!(validate_sim_number("1234567890").is_ok());
        assert!(validate_sim_number("123456789").is_err());
        assert!(validate_sim_number(&"9".repeat(21)).is_err());
        assert!(validate_sim_number("8991-0009-1234").is_err());
        assert!(validate_sim_number("").is_err());
    }

    #[test]
    fn test_normalize_sim_number() {
        assert_eq!(normalize_sim_number("8991 0009 1234 5678"), "8991000912345678");
        assert_eq!(normalize_sim_number("8991-0009-1234-5678"), "8991000912345678");
        assert_eq!(normalize_sim_number("1234567890"), "1234567890");
    }
}
