//! Multiplication kernel for dense coefficient arrays.
//!
//! Three inner loops dominate everything built on top of this crate:
//! classical schoolbook multiplication, Karatsuba multiplication, and the
//! dedicated squaring path. Each comes in two flavors:
//!
//! - **unsafe**: partial products accumulate in raw u64 words with no
//!   reduction inside the loop; the caller reduces the finished array.
//!   Valid only when the column sums cannot wrap, which the dispatcher
//!   checks against the ring's accumulator guard.
//! - **safe**: every elementary step is reduced through the ring
//!   descriptor, so no intermediate can overflow regardless of modulus.
//!
//! Recursion scratch comes from a pool keyed by buffer length; the pool
//! lives for one top-level multiplication and is dropped when it returns.

use machina_arith::Zp64;
use rustc_hash::FxHashMap;

/// Below this product of operand lengths, plain contexts use the
/// classical algorithm.
pub const MUL_CLASSICAL_THRESHOLD: u64 = 256 * 256;

/// The classical/Karatsuba switch when every elementary step must stay
/// reduced.
pub const MUL_MOD_CLASSICAL_THRESHOLD: u64 = 128 * 128;

/// Inside the Karatsuba recursion, tails below this product of lengths
/// fall back to the classical loop.
pub const KARATSUBA_THRESHOLD: usize = 1024;

/// Reusable recursion scratch, keyed by buffer length.
#[derive(Default)]
struct ScratchPool {
    free: FxHashMap<usize, Vec<Vec<u64>>>,
}

impl ScratchPool {
    /// Takes a zeroed buffer of exactly `len` words.
    fn take(&mut self, len: usize) -> Vec<u64> {
        match self.free.get_mut(&len).and_then(Vec::pop) {
            Some(mut buf) => {
                buf.fill(0);
                buf
            }
            None => vec![0; len],
        }
    }

    fn put(&mut self, buf: Vec<u64>) {
        self.free.entry(buf.len()).or_default().push(buf);
    }
}

// ---------------------------------------------------------------------
// classical
// ---------------------------------------------------------------------

/// Classical n*m multiplication into `result`, raw accumulation.
///
/// `result` must hold at least `a.len() + b.len() - 1` zero-initialized
/// positions. Zero multipliers are skipped (sparse inputs are common after
/// truncation and shifts), and the shorter operand drives the outer loop.
pub fn multiply_classical_unsafe(result: &mut [u64], a: &[u64], b: &[u64]) {
    if a.len() > b.len() {
        multiply_classical_unsafe(result, b, a);
        return;
    }
    for (i, &c) in a.iter().enumerate() {
        if c != 0 {
            for (j, &d) in b.iter().enumerate() {
                result[i + j] = result[i + j].wrapping_add(c.wrapping_mul(d));
            }
        }
    }
}

/// Classical n*m multiplication with every step reduced through the ring.
pub fn multiply_classical_safe(result: &mut [u64], a: &[u64], b: &[u64], ring: &Zp64) {
    if a.len() > b.len() {
        multiply_classical_safe(result, b, a, ring);
        return;
    }
    for (i, &c) in a.iter().enumerate() {
        if c != 0 {
            for (j, &d) in b.iter().enumerate() {
                result[i + j] = ring.add(result[i + j], ring.mul(c, d));
            }
        }
    }
}

/// Classical squaring into `result`: diagonal terms once, off-diagonal
/// terms doubled.
pub fn square_classical_unsafe(result: &mut [u64], a: &[u64]) {
    for (i, &c) in a.iter().enumerate() {
        if c == 0 {
            continue;
        }
        result[2 * i] = result[2 * i].wrapping_add(c.wrapping_mul(c));
        for (j, &d) in a.iter().enumerate().skip(i + 1) {
            result[i + j] = result[i + j].wrapping_add(c.wrapping_mul(d).wrapping_mul(2));
        }
    }
}

/// Classical squaring with every step reduced through the ring.
pub fn square_classical_safe(result: &mut [u64], a: &[u64], ring: &Zp64) {
    for (i, &c) in a.iter().enumerate() {
        if c == 0 {
            continue;
        }
        result[2 * i] = ring.add(result[2 * i], ring.mul(c, c));
        for (j, &d) in a.iter().enumerate().skip(i + 1) {
            let t = ring.mul(c, d);
            result[i + j] = ring.add(result[i + j], ring.add(t, t));
        }
    }
}

// ---------------------------------------------------------------------
// Karatsuba
// ---------------------------------------------------------------------

/// Karatsuba multiplication with raw accumulation.
///
/// Splits the longer operand at `ceil(n / 2)`; when the shorter operand
/// lies entirely below the split the three-call scheme degenerates to two
/// recursive calls.
pub fn multiply_karatsuba_unsafe(f: &[u64], g: &[u64]) -> Vec<u64> {
    let mut pool = ScratchPool::default();
    karatsuba_unsafe(f, g, &mut pool)
}

fn karatsuba_unsafe(f: &[u64], g: &[u64], pool: &mut ScratchPool) -> Vec<u64> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }
    // single coefficient in f
    if f.len() == 1 {
        let mut result = pool.take(g.len());
        for (r, &c) in result.iter_mut().zip(g) {
            *r = f[0].wrapping_mul(c);
        }
        return result;
    }
    // single coefficient in g
    if g.len() == 1 {
        let mut result = pool.take(f.len());
        for (r, &c) in result.iter_mut().zip(f) {
            *r = g[0].wrapping_mul(c);
        }
        return result;
    }
    // both linear
    if f.len() == 2 && g.len() == 2 {
        let mut result = pool.take(3);
        result[0] = f[0].wrapping_mul(g[0]);
        result[1] = f[0]
            .wrapping_mul(g[1])
            .wrapping_add(f[1].wrapping_mul(g[0]));
        result[2] = f[1].wrapping_mul(g[1]);
        return result;
    }
    // switch to classical
    if f.len() * g.len() < KARATSUBA_THRESHOLD {
        let mut result = pool.take(f.len() + g.len() - 1);
        multiply_classical_unsafe(&mut result, f, g);
        return result;
    }
    if f.len() < g.len() {
        return karatsuba_unsafe(g, f, pool);
    }

    let split = (f.len() + 1) / 2;
    // the shorter operand sits entirely below the split
    if g.len() <= split {
        let f0g = karatsuba_unsafe(&f[..split], g, pool);
        let f1g = karatsuba_unsafe(&f[split..], g, pool);
        let mut result = pool.take(f.len() + g.len() - 1);
        result[..f0g.len()].copy_from_slice(&f0g);
        for (i, &c) in f1g.iter().enumerate() {
            result[i + split] = result[i + split].wrapping_add(c);
        }
        pool.put(f0g);
        pool.put(f1g);
        return result;
    }

    let (f0, f1) = f.split_at(split);
    let (g0, g1) = g.split_at(split);
    let f0g0 = karatsuba_unsafe(f0, g0, pool);
    let f1g1 = karatsuba_unsafe(f1, g1, pool);

    let mut fsum = pool.take(f0.len().max(f1.len()));
    fsum[..f0.len()].copy_from_slice(f0);
    for (i, &c) in f1.iter().enumerate() {
        fsum[i] = fsum[i].wrapping_add(c);
    }
    let mut gsum = pool.take(g0.len().max(g1.len()));
    gsum[..g0.len()].copy_from_slice(g0);
    for (i, &c) in g1.iter().enumerate() {
        gsum[i] = gsum[i].wrapping_add(c);
    }

    let mut mid = karatsuba_unsafe(&fsum, &gsum, pool);
    pool.put(fsum);
    pool.put(gsum);

    let wanted = mid.len().max(f0g0.len()).max(f1g1.len());
    if mid.len() < wanted {
        let mut grown = pool.take(wanted);
        grown[..mid.len()].copy_from_slice(&mid);
        pool.put(mid);
        mid = grown;
    }
    for (i, &c) in f0g0.iter().enumerate() {
        mid[i] = mid[i].wrapping_sub(c);
    }
    for (i, &c) in f1g1.iter().enumerate() {
        mid[i] = mid[i].wrapping_sub(c);
    }

    let mut result = pool.take(f.len() + g.len() - 1);
    result[..f0g0.len()].copy_from_slice(&f0g0);
    for (i, &c) in mid.iter().enumerate() {
        result[i + split] = result[i + split].wrapping_add(c);
    }
    for (i, &c) in f1g1.iter().enumerate() {
        result[i + 2 * split] = result[i + 2 * split].wrapping_add(c);
    }
    pool.put(f0g0);
    pool.put(f1g1);
    pool.put(mid);
    result
}

/// Karatsuba multiplication with every step reduced through the ring.
pub fn multiply_karatsuba_safe(f: &[u64], g: &[u64], ring: &Zp64) -> Vec<u64> {
    let mut pool = ScratchPool::default();
    karatsuba_safe(f, g, ring, &mut pool)
}

fn karatsuba_safe(f: &[u64], g: &[u64], ring: &Zp64, pool: &mut ScratchPool) -> Vec<u64> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }
    if f.len() == 1 {
        let mut result = pool.take(g.len());
        for (r, &c) in result.iter_mut().zip(g) {
            *r = ring.mul(f[0], c);
        }
        return result;
    }
    if g.len() == 1 {
        let mut result = pool.take(f.len());
        for (r, &c) in result.iter_mut().zip(f) {
            *r = ring.mul(g[0], c);
        }
        return result;
    }
    if f.len() == 2 && g.len() == 2 {
        let mut result = pool.take(3);
        result[0] = ring.mul(f[0], g[0]);
        result[1] = ring.add(ring.mul(f[0], g[1]), ring.mul(f[1], g[0]));
        result[2] = ring.mul(f[1], g[1]);
        return result;
    }
    if f.len() * g.len() < KARATSUBA_THRESHOLD {
        let mut result = pool.take(f.len() + g.len() - 1);
        multiply_classical_safe(&mut result, f, g, ring);
        return result;
    }
    if f.len() < g.len() {
        return karatsuba_safe(g, f, ring, pool);
    }

    let split = (f.len() + 1) / 2;
    if g.len() <= split {
        let f0g = karatsuba_safe(&f[..split], g, ring, pool);
        let f1g = karatsuba_safe(&f[split..], g, ring, pool);
        let mut result = pool.take(f.len() + g.len() - 1);
        result[..f0g.len()].copy_from_slice(&f0g);
        for (i, &c) in f1g.iter().enumerate() {
            result[i + split] = ring.add(result[i + split], c);
        }
        pool.put(f0g);
        pool.put(f1g);
        return result;
    }

    let (f0, f1) = f.split_at(split);
    let (g0, g1) = g.split_at(split);
    let f0g0 = karatsuba_safe(f0, g0, ring, pool);
    let f1g1 = karatsuba_safe(f1, g1, ring, pool);

    let mut fsum = pool.take(f0.len().max(f1.len()));
    fsum[..f0.len()].copy_from_slice(f0);
    for (i, &c) in f1.iter().enumerate() {
        fsum[i] = ring.add(fsum[i], c);
    }
    let mut gsum = pool.take(g0.len().max(g1.len()));
    gsum[..g0.len()].copy_from_slice(g0);
    for (i, &c) in g1.iter().enumerate() {
        gsum[i] = ring.add(gsum[i], c);
    }

    let mut mid = karatsuba_safe(&fsum, &gsum, ring, pool);
    pool.put(fsum);
    pool.put(gsum);

    let wanted = mid.len().max(f0g0.len()).max(f1g1.len());
    if mid.len() < wanted {
        let mut grown = pool.take(wanted);
        grown[..mid.len()].copy_from_slice(&mid);
        pool.put(mid);
        mid = grown;
    }
    for (i, &c) in f0g0.iter().enumerate() {
        mid[i] = ring.sub(mid[i], c);
    }
    for (i, &c) in f1g1.iter().enumerate() {
        mid[i] = ring.sub(mid[i], c);
    }

    let mut result = pool.take(f.len() + g.len() - 1);
    result[..f0g0.len()].copy_from_slice(&f0g0);
    for (i, &c) in mid.iter().enumerate() {
        result[i + split] = ring.add(result[i + split], c);
    }
    for (i, &c) in f1g1.iter().enumerate() {
        result[i + 2 * split] = ring.add(result[i + 2 * split], c);
    }
    pool.put(f0g0);
    pool.put(f1g1);
    pool.put(mid);
    result
}

/// Karatsuba squaring with raw accumulation: one recursion per half plus
/// the middle `(f0 + f1)^2`.
pub fn square_karatsuba_unsafe(f: &[u64]) -> Vec<u64> {
    let mut pool = ScratchPool::default();
    square_karatsuba_unsafe0(f, &mut pool)
}

fn square_karatsuba_unsafe0(f: &[u64], pool: &mut ScratchPool) -> Vec<u64> {
    if f.is_empty() {
        return Vec::new();
    }
    if f.len() == 1 {
        let mut result = pool.take(1);
        result[0] = f[0].wrapping_mul(f[0]);
        return result;
    }
    if f.len() == 2 {
        let mut result = pool.take(3);
        result[0] = f[0].wrapping_mul(f[0]);
        result[1] = f[0].wrapping_mul(f[1]).wrapping_mul(2);
        result[2] = f[1].wrapping_mul(f[1]);
        return result;
    }
    if f.len() * f.len() < KARATSUBA_THRESHOLD {
        let mut result = pool.take(2 * f.len() - 1);
        square_classical_unsafe(&mut result, f);
        return result;
    }

    let split = (f.len() + 1) / 2;
    let (f0, f1) = f.split_at(split);
    let f0s = square_karatsuba_unsafe0(f0, pool);
    let f1s = square_karatsuba_unsafe0(f1, pool);

    let mut fsum = pool.take(f0.len().max(f1.len()));
    fsum[..f0.len()].copy_from_slice(f0);
    for (i, &c) in f1.iter().enumerate() {
        fsum[i] = fsum[i].wrapping_add(c);
    }
    let mut mid = square_karatsuba_unsafe0(&fsum, pool);
    pool.put(fsum);

    let wanted = mid.len().max(f0s.len()).max(f1s.len());
    if mid.len() < wanted {
        let mut grown = pool.take(wanted);
        grown[..mid.len()].copy_from_slice(&mid);
        pool.put(mid);
        mid = grown;
    }
    for (i, &c) in f0s.iter().enumerate() {
        mid[i] = mid[i].wrapping_sub(c);
    }
    for (i, &c) in f1s.iter().enumerate() {
        mid[i] = mid[i].wrapping_sub(c);
    }

    let mut result = pool.take(2 * f.len() - 1);
    result[..f0s.len()].copy_from_slice(&f0s);
    for (i, &c) in mid.iter().enumerate() {
        result[i + split] = result[i + split].wrapping_add(c);
    }
    for (i, &c) in f1s.iter().enumerate() {
        result[i + 2 * split] = result[i + 2 * split].wrapping_add(c);
    }
    pool.put(f0s);
    pool.put(f1s);
    pool.put(mid);
    result
}

/// Karatsuba squaring with every step reduced through the ring.
pub fn square_karatsuba_safe(f: &[u64], ring: &Zp64) -> Vec<u64> {
    let mut pool = ScratchPool::default();
    square_karatsuba_safe0(f, ring, &mut pool)
}

fn square_karatsuba_safe0(f: &[u64], ring: &Zp64, pool: &mut ScratchPool) -> Vec<u64> {
    if f.is_empty() {
        return Vec::new();
    }
    if f.len() == 1 {
        let mut result = pool.take(1);
        result[0] = ring.mul(f[0], f[0]);
        return result;
    }
    if f.len() == 2 {
        let mut result = pool.take(3);
        result[0] = ring.mul(f[0], f[0]);
        let t = ring.mul(f[0], f[1]);
        result[1] = ring.add(t, t);
        result[2] = ring.mul(f[1], f[1]);
        return result;
    }
    if f.len() * f.len() < KARATSUBA_THRESHOLD {
        let mut result = pool.take(2 * f.len() - 1);
        square_classical_safe(&mut result, f, ring);
        return result;
    }

    let split = (f.len() + 1) / 2;
    let (f0, f1) = f.split_at(split);
    let f0s = square_karatsuba_safe0(f0, ring, pool);
    let f1s = square_karatsuba_safe0(f1, ring, pool);

    let mut fsum = pool.take(f0.len().max(f1.len()));
    fsum[..f0.len()].copy_from_slice(f0);
    for (i, &c) in f1.iter().enumerate() {
        fsum[i] = ring.add(fsum[i], c);
    }
    let mut mid = square_karatsuba_safe0(&fsum, ring, pool);
    pool.put(fsum);

    let wanted = mid.len().max(f0s.len()).max(f1s.len());
    if mid.len() < wanted {
        let mut grown = pool.take(wanted);
        grown[..mid.len()].copy_from_slice(&mid);
        pool.put(mid);
        mid = grown;
    }
    for (i, &c) in f0s.iter().enumerate() {
        mid[i] = ring.sub(mid[i], c);
    }
    for (i, &c) in f1s.iter().enumerate() {
        mid[i] = ring.sub(mid[i], c);
    }

    let mut result = pool.take(2 * f.len() - 1);
    result[..f0s.len()].copy_from_slice(&f0s);
    for (i, &c) in mid.iter().enumerate() {
        result[i + split] = ring.add(result[i + split], c);
    }
    for (i, &c) in f1s.iter().enumerate() {
        result[i + 2 * split] = ring.add(result[i + 2 * split], c);
    }
    pool.put(f0s);
    pool.put(f1s);
    pool.put(mid);
    result
}

// ---------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------

/// True when raw u64 accumulation of the classical loop cannot wrap.
fn classical_fits_unsafe(ring: &Zp64, n: usize, m: usize) -> bool {
    n.min(m) as u64 <= ring.max_accum()
}

/// True when the Karatsuba recursion keeps its operand-sum headroom.
///
/// Every split level may double the operand magnitude, scaling partial
/// products by four; the bound therefore demands `4^levels` slack on top
/// of the plain column count.
fn karatsuba_fits_unsafe(ring: &Zp64, n: usize, m: usize) -> bool {
    let levels = usize::BITS - n.max(m).leading_zeros();
    let shift = 2 * levels;
    if shift >= 64 {
        return false;
    }
    (n.min(m) as u128) << shift <= u128::from(ring.max_accum())
}

/// Computes the normalized full product of two coefficient arrays.
///
/// Chooses the raw-accumulation path when the ring's accumulator guard
/// allows it and the algorithm by the operand-size thresholds; the
/// returned array always satisfies the residue invariant.
#[must_use]
pub fn multiply_mod(ring: &Zp64, a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let nm = a.len() as u64 * b.len() as u64;
    if nm < MUL_CLASSICAL_THRESHOLD && classical_fits_unsafe(ring, a.len(), b.len()) {
        let mut result = vec![0u64; a.len() + b.len() - 1];
        multiply_classical_unsafe(&mut result, a, b);
        reduce_all(&mut result, ring);
        result
    } else if nm >= MUL_CLASSICAL_THRESHOLD && karatsuba_fits_unsafe(ring, a.len(), b.len()) {
        let mut result = multiply_karatsuba_unsafe(a, b);
        reduce_all(&mut result, ring);
        result
    } else if nm < MUL_MOD_CLASSICAL_THRESHOLD {
        let mut result = vec![0u64; a.len() + b.len() - 1];
        multiply_classical_safe(&mut result, a, b, ring);
        result
    } else {
        multiply_karatsuba_safe(a, b, ring)
    }
}

/// Computes the normalized square of a coefficient array.
#[must_use]
pub fn square_mod(ring: &Zp64, a: &[u64]) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let nn = a.len() as u64 * a.len() as u64;
    // doubled off-diagonal terms cost one extra bit of headroom
    let fits_classical = a.len() as u64 <= ring.max_accum() / 2;
    if nn < MUL_CLASSICAL_THRESHOLD && fits_classical {
        let mut result = vec![0u64; 2 * a.len() - 1];
        square_classical_unsafe(&mut result, a);
        reduce_all(&mut result, ring);
        result
    } else if nn >= MUL_CLASSICAL_THRESHOLD && square_fits_unsafe(ring, a.len()) {
        let mut result = square_karatsuba_unsafe(a);
        reduce_all(&mut result, ring);
        result
    } else if nn < MUL_MOD_CLASSICAL_THRESHOLD {
        let mut result = vec![0u64; 2 * a.len() - 1];
        square_classical_safe(&mut result, a, ring);
        result
    } else {
        square_karatsuba_safe(a, ring)
    }
}

fn square_fits_unsafe(ring: &Zp64, n: usize) -> bool {
    let levels = usize::BITS - n.leading_zeros();
    let shift = 2 * levels + 1;
    if shift >= 64 {
        return false;
    }
    (n as u128) << shift <= u128::from(ring.max_accum())
}

fn reduce_all(data: &mut [u64], ring: &Zp64) {
    let magic = ring.magic();
    for c in data {
        *c = magic.reduce(*c);
    }
}
