use once_cell::sync::Lazy;
use regex::Regex;

// 24 小时制 HH:MM
static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("Invalid time regex"));

pub fn validate_user_name(user_name: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 20
    let len = user_name.chars().count();
    if !(3..=20).contains(&len) {
        return Err("User name length must be between 3 and 20 characters");
    }
    if user_name.trim().is_empty() {
        return Err("User name must not be blank");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if password.trim().is_empty() {
        return Err("Password must not be blank");
    }
    Ok(())
}

pub fn validate_academic_number(academic_number: &str) -> Result<(), &'static str> {
    // 学号长度校验：5 <= x <= 20
    let len = academic_number.chars().count();
    if !(5..=20).contains(&len) {
        return Err("Academic number length must be between 5 and 20 characters");
    }
    if academic_number.trim().is_empty() {
        return Err("Academic number must not be blank");
    }
    Ok(())
}

pub fn validate_student_name(student_name: &str) -> Result<(), &'static str> {
    // 学生姓名长度校验：3 <= x <= 50
    let len = student_name.chars().count();
    if !(3..=50).contains(&len) {
        return Err("Student name length must be between 3 and 50 characters");
    }
    Ok(())
}

pub fn validate_professor_name(name: &str) -> Result<(), &'static str> {
    let len = name.trim().chars().count();
    if len == 0 || len > 100 {
        return Err("Professor name must be between 1 and 100 characters");
    }
    Ok(())
}

pub fn validate_course_name(course_name: &str) -> Result<(), &'static str> {
    let len = course_name.trim().chars().count();
    if len == 0 || len > 100 {
        return Err("Course name must be between 1 and 100 characters");
    }
    Ok(())
}

pub fn validate_clock_time(value: &str) -> Result<(), &'static str> {
    if !CLOCK_TIME_RE.is_match(value) {
        return Err("Time must use the 24-hour HH:MM format");
    }
    Ok(())
}

/// 校验课次时间段：各自格式正确，且同时给出时开始早于结束
pub fn validate_session_times(
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<(), &'static str> {
    if let Some(start) = start_time {
        validate_clock_time(start)?;
    }
    if let Some(end) = end_time {
        validate_clock_time(end)?;
    }
    // 同为 HH:MM 时字典序即时间先后
    if let (Some(start), Some(end)) = (start_time, end_time)
        && start >= end
    {
        return Err("Session start time must be earlier than end time");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_rules() {
        assert!(validate_user_name("drsmith").is_ok());
        assert!(validate_user_name("ab").is_err());
        assert!(validate_user_name("a_very_long_user_name_x").is_err());
        assert!(validate_user_name("Dr. Smith").is_ok());
        assert!(validate_user_name("     ").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("s3cretpass").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("        ").is_err());
    }

    #[test]
    fn test_academic_number_rules() {
        assert!(validate_academic_number("S0000001").is_ok());
        assert!(validate_academic_number("S01").is_err());
        assert!(validate_academic_number("S0000000000000000000001").is_err());
        assert!(validate_academic_number("2024/001").is_ok());
        assert!(validate_academic_number("      ").is_err());
    }

    #[test]
    fn test_student_name_rules() {
        assert!(validate_student_name("Alice Doe").is_ok());
        assert!(validate_student_name("Al").is_err());
        assert!(validate_student_name(&"x".repeat(51)).is_err());
        // 按原值计长度，与入库值一致
        assert!(validate_student_name(" Al ").is_ok());
    }

    #[test]
    fn test_names_must_not_be_blank() {
        assert!(validate_professor_name("Dr. Smith").is_ok());
        assert!(validate_professor_name("   ").is_err());
        assert!(validate_course_name("CS101").is_ok());
        assert!(validate_course_name("").is_err());
    }

    #[test]
    fn test_session_times() {
        assert!(validate_session_times(Some("09:00"), Some("10:30")).is_ok());
        assert!(validate_session_times(None, None).is_ok());
        assert!(validate_session_times(Some("9:00"), None).is_err());
        assert!(validate_session_times(Some("24:00"), None).is_err());
        assert!(validate_session_times(Some("11:00"), Some("10:00")).is_err());
    }
}
