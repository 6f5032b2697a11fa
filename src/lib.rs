// Abstract Factory: families of related products behind trait objects.
// A factory hands out matching products; the client only sees the traits.

pub mod client;
pub mod error;
pub mod factory;
pub mod products;

pub use client::{client_method, describe, run};
pub use error::{Error, Result};
pub use factory::{AbstractFactory, ConcreteFactory1, ConcreteFactory2, Family};
pub use products::{
    AbstractProductA, AbstractProductB, ConcreteProductA1, ConcreteProductA2, ConcreteProductB1,
    ConcreteProductB2,
};

pub mod examples {
    //! # Abstract Factory
    //!
    //! - Product A and Product B traits, each with variants 1 and 2
    //! - A factory trait whose implementations build one matching pair
    //! - A client that works with any factory through `&dyn AbstractFactory`
    //!
    //! Run the demo with:
    //! ```bash
    //! cargo run --bin abstract_factory
    //! RUST_LOG=debug cargo run --bin abstract_factory
    //! ```
}
