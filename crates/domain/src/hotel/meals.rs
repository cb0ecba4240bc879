//! Meal selection and pricing.

use serde::{Deserialize, Serialize};

use super::Money;

/// A meal slot during the stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Every slot, in the order they are offered.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Fixed price of a choice in this slot.
    pub fn price(&self, choice: MealChoice) -> Money {
        let rupees = match (self, choice) {
            (_, MealChoice::Skip) => 0,
            (MealSlot::Breakfast, MealChoice::Veg) => 150,
            (MealSlot::Breakfast, MealChoice::NonVeg) => 200,
            (MealSlot::Lunch, MealChoice::Veg) => 300,
            (MealSlot::Lunch, MealChoice::NonVeg) => 400,
            (MealSlot::Dinner, MealChoice::Veg) => 350,
            (MealSlot::Dinner, MealChoice::NonVeg) => 450,
        };
        Money::from_rupees(rupees)
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the customer picked for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MealChoice {
    #[default]
    Skip,
    Veg,
    NonVeg,
}

impl MealChoice {
    /// Maps a menu code (0 = none, 1 = veg, 2 = non-veg) to a choice.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MealChoice::Skip),
            1 => Some(MealChoice::Veg),
            2 => Some(MealChoice::NonVeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealChoice::Skip => "None",
            MealChoice::Veg => "Veg",
            MealChoice::NonVeg => "Non-Veg",
        }
    }
}

/// Independent choices for breakfast, lunch and dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: MealChoice,
    pub lunch: MealChoice,
    pub dinner: MealChoice,
}

impl MealPlan {
    /// A plan with no meals.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(breakfast: MealChoice, lunch: MealChoice, dinner: MealChoice) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    /// Returns the choice for a slot.
    pub fn choice(&self, slot: MealSlot) -> MealChoice {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    /// Returns a copy with one slot changed.
    pub fn with(mut self, slot: MealSlot, choice: MealChoice) -> Self {
        match slot {
            MealSlot::Breakfast => self.breakfast = choice,
            MealSlot::Lunch => self.lunch = choice,
            MealSlot::Dinner => self.dinner = choice,
        }
        self
    }

    /// Sum of the three slot prices.
    pub fn cost(&self) -> Money {
        MealSlot::ALL
            .into_iter()
            .map(|slot| slot.price(self.choice(slot)))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        MealSlot::ALL
            .into_iter()
            .all(|slot| self.choice(slot) == MealChoice::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(MealSlot::Breakfast.price(MealChoice::Veg), Money::from_rupees(150));
        assert_eq!(MealSlot::Breakfast.price(MealChoice::NonVeg), Money::from_rupees(200));
        assert_eq!(MealSlot::Lunch.price(MealChoice::Veg), Money::from_rupees(300));
        assert_eq!(MealSlot::Lunch.price(MealChoice::NonVeg), Money::from_rupees(400));
        assert_eq!(MealSlot::Dinner.price(MealChoice::Veg), Money::from_rupees(350));
        assert_eq!(MealSlot::Dinner.price(MealChoice::NonVeg), Money::from_rupees(450));
        for slot in MealSlot::ALL {
            assert!(slot.price(MealChoice::Skip).is_zero());
        }
    }

    #[test]
    fn test_plan_cost_sums_slots() {
        let plan = MealPlan::new(MealChoice::Veg, MealChoice::Skip, MealChoice::NonVeg);
        assert_eq!(plan.cost(), Money::from_rupees(600));

        let everything = MealPlan::new(MealChoice::NonVeg, MealChoice::NonVeg, MealChoice::NonVeg);
        assert_eq!(everything.cost(), Money::from_rupees(1050));
    }

    #[test]
    fn test_no_meals_cost_nothing() {
        assert!(MealPlan::none().cost().is_zero());
        assert!(MealPlan::none().is_empty());
    }

    #[test]
    fn test_with_sets_single_slot() {
        let plan = MealPlan::none().with(MealSlot::Lunch, MealChoice::Veg);
        assert_eq!(plan.choice(MealSlot::Lunch), MealChoice::Veg);
        assert_eq!(plan.choice(MealSlot::Breakfast), MealChoice::Skip);
        assert!(!plan.is_empty());
        assert_eq!(plan.cost(), Money::from_rupees(300));
    }

    #[test]
    fn test_menu_codes() {
        assert_eq!(MealChoice::from_code(0), Some(MealChoice::Skip));
        assert_eq!(MealChoice::from_code(1), Some(MealChoice::Veg));
        assert_eq!(MealChoice::from_code(2), Some(MealChoice::NonVeg));
        assert_eq!(MealChoice::from_code(3), None);
    }
}
