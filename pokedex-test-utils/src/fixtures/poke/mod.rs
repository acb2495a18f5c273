use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn poke<'a>(&'a mut self) -> PokeFixtures<'a> {
        PokeFixtures { setup: self }
    }
}

pub struct PokeFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
