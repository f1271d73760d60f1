use core::fmt::Debug;
use rand::{CryptoRng, Rng};

/// Minimal cyclic-group capability required by the protocol.
///
/// The commitment scheme, shuffle engine, and subset checker only need
/// fixed-base exponentiation on two independent generators `g` and `h`,
/// element multiplication, and exponent arithmetic mod the group order.
/// Everything above this trait is backend-agnostic.
///
/// Implementations take their parameters on trust: checking that the
/// modulus is prime and that no discrete-log relation between `g` and `h`
/// is known is a pre-condition owned by whoever constructs the backend.
pub trait CyclicGroup {
    /// A group element.
    type Element: Clone + PartialEq + Debug;
    /// A residue mod the group order, used as message or opening exponent.
    type Exponent: Clone + PartialEq + Debug;

    /// The multiplicative identity.
    fn identity(&self) -> Self::Element;

    /// Group multiplication.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `g^exponent` for the message generator `g`.
    fn exp_g(&self, exponent: &Self::Exponent) -> Self::Element;

    /// `h^exponent` for the randomness generator `h`.
    fn exp_h(&self, exponent: &Self::Exponent) -> Self::Element;

    /// Injects a plaintext value into the exponent domain.
    fn exponent_from_u64(&self, value: u64) -> Self::Exponent;

    /// The zero exponent.
    fn zero_exponent(&self) -> Self::Exponent;

    /// `a + b` mod the group order.
    fn add_exponents(&self, a: &Self::Exponent, b: &Self::Exponent) -> Self::Exponent;

    /// `a - b` mod the group order, wrapping instead of going negative.
    fn sub_exponents(&self, a: &Self::Exponent, b: &Self::Exponent) -> Self::Exponent;

    /// Draws an exponent uniformly from `[1, order - 1]`.
    fn random_exponent<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::Exponent;
}
