// Factories: each one builds a single, internally consistent product family.
// Signatures return trait objects; the concrete type is chosen inside.

use std::fmt;

use crate::products::{
    AbstractProductA, AbstractProductB, ConcreteProductA1, ConcreteProductA2, ConcreteProductB1,
    ConcreteProductB2,
};

// ============================================================================
// Factory trait and variants
// ============================================================================

/// Creates one product of each kind, always from the same family.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

/// Builds A1 and B1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        log::debug!("ConcreteFactory1 creating ConcreteProductA1");
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        log::debug!("ConcreteFactory1 creating ConcreteProductB1");
        Box::new(ConcreteProductB1)
    }
}

/// Builds A2 and B2.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        log::debug!("ConcreteFactory2 creating ConcreteProductA2");
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        log::debug!("ConcreteFactory2 creating ConcreteProductB2");
        Box::new(ConcreteProductB2)
    }
}

// ============================================================================
// Family selector
// ============================================================================

/// Names a product family and hands out its factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    One,
    Two,
}

impl Family {
    /// Demonstration order.
    pub const ALL: [Family; 2] = [Family::One, Family::Two];

    pub fn number(self) -> u8 {
        match self {
            Family::One => 1,
            Family::Two => 2,
        }
    }

    pub fn factory(self) -> Box<dyn AbstractFactory> {
        log::debug!("Selecting factory for family {}", self);
        match self {
            Family::One => Box::new(ConcreteFactory1),
            Family::Two => Box::new(ConcreteFactory2),
        }
    }

    /// Line announcing a client run against this family's factory.
    pub fn banner(self) -> &'static str {
        match self {
            Family::One => "Client: Testing client code with the first factory type...",
            Family::Two => "Client: Testing the same client code with the second factory type...",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ============================================================================
// Tests
// ============================================================================
