//! Polymorphic dispatch through an explicit trait.
//!
//! `Speaks` carries a provided `speak` body that every animal gets for
//! free; a variant that wants its own voice overrides it. Callers hold a
//! `&dyn Speaks` and never need to know which variant they have.

pub trait Speaks {
    // needs to be implemented downstream
    fn name(&self) -> &str;
    // pre-made implementation, overridable
    fn speak(&self) -> String {
        format!("{} makes a sound", self.name())
    }
}

pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }
}

impl Speaks for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }
}

impl Speaks for Dog {
    fn name(&self) -> &str {
        &self.name
    }
    fn speak(&self) -> String {
        format!("{} barks", self.name())
    }
}
