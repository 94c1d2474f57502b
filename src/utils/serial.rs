use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证设备序列号格式
pub fn validate_serial_number(serial: &str) -> AppResult<()> {
    let serial_regex = Regex::new(r"^[A-Z0-9][A-Z0-9/_-]{2,31}$").unwrap();

    if !serial_regex.is_match(serial) {
        return Err(AppError::ValidationError(
            "Serial number must be 3-32 characters: letters, digits, '-', '_' or '/'".to_string(),
        ));
    }

    Ok(())
}

/// 规范化序列号：去除首尾空白并转为大写
pub fn normalize_serial(serial: &str) -> String {
    serial.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_serial_number() {
        assert!(validate_serial_number("DWLR-2024-0153").is_ok());
        assert!(validate_serial_number("FM/22/0081").is_ok());
        assert!(validate_serial_number("A1B").is_ok());
        assert!(validate_serial_number("").is_err());
        assert!(validate_serial_number("AB").is_err());
        assert!(validate_serial_number("has space").is_err());
        assert!(validate_serial_number("-leading-dash").is_err());
        assert!(validate_serial_number(&"X".repeat(33)).is_err());
    }

    #[test]
    fn test_normalize_serial() {
        assert_eq!(normalize_serial("  dwlr-2024-0153 "), "DWLR-2024-0153");
        assert_eq!(normalize_serial("fm/22/0081"), "FM/22/0081");
        assert_eq!(normalize_serial("A1B2"), "A1B2");
    }
}
