//! [`CyclicGroup`] backend over the multiplicative group of integers mod
//! a prime.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

use crate::group::CyclicGroup;
use crate::zp::constants::{TOY_G, TOY_H, TOY_MODULUS_DEC};

/// Multiplicative subgroup of the integers mod a prime `p`.
///
/// Elements are residues mod `p`; exponents live mod `p - 1`. Both
/// generators are plain residues handed in at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZpGroup {
    modulus: BigUint,
    g: BigUint,
    h: BigUint,
    order: BigUint,
}

impl ZpGroup {
    /// Builds a backend from the given modulus and generators.
    ///
    /// Primality of `modulus` and independence of `g` and `h` are the
    /// caller's pre-condition; nothing is validated here.
    pub fn new(modulus: BigUint, g: BigUint, h: BigUint) -> ZpGroup {
        let order = &modulus - 1u32;
        ZpGroup {
            modulus,
            g,
            h,
            order,
        }
    }

    /// The toy reference parameters: a 78-digit prime with `g = 2`, `h = 3`.
    pub fn toy_parameters() -> ZpGroup {
        let modulus = BigUint::parse_bytes(TOY_MODULUS_DEC.as_bytes(), 10)
            .expect("toy modulus digits are valid decimal");
        ZpGroup::new(modulus, BigUint::from(TOY_G), BigUint::from(TOY_H))
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The exponent modulus `p - 1`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }
}

impl CyclicGroup for ZpGroup {
    type Element = BigUint;
    type Exponent = BigUint;

    fn identity(&self) -> BigUint {
        BigUint::one()
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    fn exp_g(&self, exponent: &BigUint) -> BigUint {
        self.g.modpow(exponent, &self.modulus)
    }

    fn exp_h(&self, exponent: &BigUint) -> BigUint {
        self.h.modpow(exponent, &self.modulus)
    }

    fn exponent_from_u64(&self, value: u64) -> BigUint {
        BigUint::from(value) % &self.order
    }

    fn zero_exponent(&self) -> BigUint {
        BigUint::zero()
    }

    fn add_exponents(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.order
    }

    fn sub_exponents(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // wrap through +order, operands may be any residue
        ((a % &self.order) + &self.order - (b % &self.order)) % &self.order
    }

    fn random_exponent<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.order)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
