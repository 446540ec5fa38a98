/// API for object properties.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag in on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
}

bitflags! {
    /// Misc flags used by [`Constraint`](`crate::store::Constraint`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct FlagConstraint: u8 {
        /// tombstoned: invisible to every later pass, never resurrected.
        const GARBAGE = 0b0000_0001;
        /// this constraint is a parity (XOR) constraint rather than a clause.
        const XOR     = 0b0000_0010;
        /// this XOR's literal sum must equal 1 (mod 2).
        const PARITY  = 0b0000_0100;
    }
}
