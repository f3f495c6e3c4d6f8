use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// National identity number: exactly 16 ASCII digits
    /// - Valid: "3171012345678901"
    /// - Invalid: "317101234567890" (15), "31710123456789O1" (letter O)
    pub static ref NIK_REGEX: Regex = Regex::new(r"^[0-9]{16}$").unwrap();

    /// Phone number: 8 to 14 ASCII digits, no separators
    /// - Valid: "08123456", "081234567890"
    /// - Invalid: "0812-3456-789", "+6281234567", "0812345"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{8,14}$").unwrap();
}
