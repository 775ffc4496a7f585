use serde::{Deserialize, Serialize};

/// A named bike. The name is stored verbatim at construction and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bike {
    name: String,
}

impl Bike {
    /// Create a bike with the given name. Any string is accepted, including
    /// the empty string.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact line [`Bike::ride`] prints for `road`.
    pub fn ride_message(&self, road: &str) -> String {
        format!("Riding: {} on road: {}", self.name, road)
    }

    /// Ride on `road`: prints one line to stdout and reports success.
    ///
    /// The operation has no failure conditions and always returns `true`.
    pub fn ride(&self, road: &str) -> bool {
        println!("{}", self.ride_message(road));
        tracing::debug!(bike = %self.name, road, "ride complete");
        true
    }
}
