//! Type-level boolean logic.
//!
//! Core types: `Present` (capability available), `Absent` (capability
//! unavailable), and the `Bool` trait connecting both to `const` space.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: selects `Then` or `Else`.
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True: the queried capability is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False: the queried capability is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
}

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl BoolNot for Present {
    type Out = Absent;
}

impl BoolNot for Absent {
    type Out = Present;
}

/// Convert a const bool (e.g. a `has_cap!` probe result) to a type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Conditional type alias.
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

/// Type-level image of a const capability probe.
pub type CapResult<const B: bool> = <() as SelectBool<B>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip() {
        assert!(Present::VALUE);
        assert!(!Absent::VALUE);
        assert!(<CapResult<true> as Bool>::VALUE);
        assert!(!<CapResult<false> as Bool>::VALUE);
    }

    #[test]
    fn and_or_truth_tables() {
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Absent as BoolNot>::Out as Bool>::VALUE);
    }

    #[test]
    fn if_selects_types() {
        let _: If<true, Present, Absent> = Present;
        let _: If<false, Present, Absent> = Absent;
    }
}
