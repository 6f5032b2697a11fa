// Product families: every product kind has one trait and one struct per variant.
// Variants with the same number are meant to be used together.

// ============================================================================
// Product A
// ============================================================================

/// First product kind. Each variant reports a result tagged with its number.
pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

// ============================================================================
// Product B
// ============================================================================

/// Second product kind. Does its own work and can also collaborate with
/// any Product A.
///
/// B1 only makes sense next to A1 (and B2 next to A2), but the collaborator
/// is typed as `&dyn AbstractProductA` so any variant is accepted. The
/// factory is what keeps the pair consistent.
pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({})", result)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({})", result)
    }
}

// ============================================================================
// Tests
// ============================================================================
