//! Value objects for the hotel domain.

use common::RoomNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Money amount in rupees, held as a decimal so halves and sums stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a money amount from a decimal value.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a money amount from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Creates a money amount from paise (1 rupee = 100 paise).
    pub fn from_paise(paise: i64) -> Self {
        Self(Decimal::new(paise, 2))
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount has no digits below one paisa.
    pub fn is_whole_paise(&self) -> bool {
        self.0.normalize().scale() <= 2
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }

    /// Returns exactly half of this amount.
    pub fn half(&self) -> Money {
        Money(self.0 / Decimal::from(2))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rs {:.2}", self.0)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, money| acc + money)
    }
}

/// Room category label, normalized to capitalized form ("single" -> "Single").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoomType(String);

impl RoomType {
    /// Creates a room type, trimming and capitalizing the label.
    pub fn new(label: impl AsRef<str>) -> Self {
        let mut chars = label.as_ref().trim().chars();
        let normalized = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Self(normalized)
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the label is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoomType {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for RoomType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.0
    }
}

/// A room in the hotel's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    has_ac: bool,
    non_smoking: bool,
    price_per_night: Money,
    available: bool,
}

impl Room {
    /// Creates a new, available room.
    pub fn new(
        number: impl Into<RoomNumber>,
        room_type: impl Into<RoomType>,
        has_ac: bool,
        non_smoking: bool,
        price_per_night: Money,
    ) -> Self {
        Self {
            number: number.into(),
            room_type: room_type.into(),
            has_ac,
            non_smoking,
            price_per_night,
            available: true,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    pub fn has_ac(&self) -> bool {
        self.has_ac
    }

    pub fn is_non_smoking(&self) -> bool {
        self.non_smoking
    }

    pub fn price_per_night(&self) -> Money {
        self.price_per_night
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns true if type, AC and smoking attributes all match the preference.
    ///
    /// Availability is not considered.
    pub fn matches(&self, preference: &RoomPreference) -> bool {
        self.room_type == preference.room_type
            && self.has_ac == preference.has_ac
            && self.non_smoking == preference.non_smoking
    }

    pub(crate) fn mark_booked(&mut self) {
        self.available = false;
    }
}

/// What the customer asked for: a room type plus AC and smoking attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPreference {
    pub room_type: RoomType,
    pub has_ac: bool,
    pub non_smoking: bool,
}

impl RoomPreference {
    /// Creates a new room preference.
    pub fn new(room_type: impl Into<RoomType>, has_ac: bool, non_smoking: bool) -> Self {
        Self {
            room_type: room_type.into(),
            has_ac,
            non_smoking,
        }
    }
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    Upi,
    AmazonPay,
    BankTransfer,
}

impl PaymentMethod {
    /// Every accepted payment method, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Upi,
        PaymentMethod::AmazonPay,
        PaymentMethod::BankTransfer,
    ];

    /// Returns the label customers type and see.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::AmazonPay => "AmazonPay",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method label outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid payment type: {input:?} (expected Credit Card, UPI, AmazonPay or Bank Transfer)")]
pub struct UnknownPaymentMethod {
    pub input: String,
}

impl std::str::FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    /// Parses an exact label; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == label)
            .ok_or_else(|| UnknownPaymentMethod {
                input: label.to_string(),
            })
    }
}

/// The guest making the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    phone: String,
    payment_method: PaymentMethod,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            payment_method,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees_and_paise() {
        assert_eq!(Money::from_rupees(40), Money::from_paise(4000));
        assert_eq!(Money::from_paise(1234).amount(), Decimal::new(1234, 2));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_rupees(12150).to_string(), "Rs 12150.00");
        assert_eq!(Money::from_paise(5).to_string(), "Rs 0.05");
        assert_eq!(Money::zero().to_string(), "Rs 0.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(150);

        assert_eq!(a + b, Money::from_rupees(1150));
        assert_eq!(a - b, Money::from_rupees(850));
        assert_eq!(a.multiply(3), Money::from_rupees(3000));

        let mut total = Money::zero();
        total += b;
        assert_eq!(total, b);
    }

    #[test]
    fn test_money_half_is_exact_for_odd_paise() {
        let total = Money::from_paise(10001);
        let half = total.half();
        assert_eq!(half.amount(), Decimal::new(50005, 3));
        assert_eq!(half + half, total);
        assert_eq!(total - half, half);
    }

    #[test]
    fn test_money_whole_paise() {
        assert!(Money::from_paise(1234).is_whole_paise());
        assert!(Money::new(Decimal::new(1000, 3)).is_whole_paise());
        assert!(!Money::new(Decimal::new(1001, 3)).is_whole_paise());
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [150, 0, 450].into_iter().map(Money::from_rupees).sum();
        assert_eq!(total, Money::from_rupees(600));
    }

    #[test]
    fn test_money_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_paise(607500)).unwrap();
        assert_eq!(json, "\"6075.00\"");
        let parsed: Money = serde_json::from_str("\"4000\"").unwrap();
        assert_eq!(parsed, Money::from_rupees(4000));
    }

    #[test]
    fn test_room_type_is_capitalized() {
        assert_eq!(RoomType::new("sUITE").as_str(), "Suite");
        assert_eq!(RoomType::new("  double "), RoomType::new("Double"));
        assert!(RoomType::new("   ").is_empty());
    }

    #[test]
    fn test_room_type_deserializes_normalized() {
        let room_type: RoomType = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(room_type.as_str(), "Single");
    }

    #[test]
    fn test_room_matches_ignores_availability() {
        let mut room = Room::new(101, "Double", true, true, Money::from_rupees(7000));
        let wanted = RoomPreference::new("double", true, true);

        assert!(room.matches(&wanted));
        assert!(!room.matches(&RoomPreference::new("Double", false, true)));
        assert!(!room.matches(&RoomPreference::new("Double", true, false)));
        assert!(!room.matches(&RoomPreference::new("Suite", true, true)));

        room.mark_booked();
        assert!(!room.is_available());
        assert!(room.matches(&wanted));
    }

    #[test]
    fn test_payment_method_parses_exact_labels() {
        assert_eq!("Credit Card".parse::<PaymentMethod>(), Ok(PaymentMethod::CreditCard));
        assert_eq!(" UPI ".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!("AmazonPay".parse::<PaymentMethod>(), Ok(PaymentMethod::AmazonPay));
        assert_eq!("Bank Transfer".parse::<PaymentMethod>(), Ok(PaymentMethod::BankTransfer));
    }

    #[test]
    fn test_payment_method_rejects_unknown_labels() {
        let err = "Cash".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err.input, "Cash");
        assert!("upi".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_display_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>(), Ok(method));
        }
    }
}
