// swap.rs — byte-order normalization for cross-platform binary I/O
//
// All file and network data is little endian on the wire. The conversions
// dispatch through a table of function pointers selected by a runtime
// byte-order probe; the table is installed once and read-only afterwards.

use std::sync::OnceLock;

struct SwapTable {
    big_short: fn(i16) -> i16,
    little_short: fn(i16) -> i16,
    big_long: fn(i32) -> i32,
    little_long: fn(i32) -> i32,
    big_float: fn(f32) -> f32,
    little_float: fn(f32) -> f32,
    big_endian: bool,
}

static SWAP: OnceLock<SwapTable> = OnceLock::new();

pub fn short_swap(l: i16) -> i16 {
    l.swap_bytes()
}

pub fn long_swap(l: i32) -> i32 {
    l.swap_bytes()
}

/// Swaps through the bit pattern; a swapped float is rarely a valid float,
/// so it must never round-trip through float arithmetic.
pub fn float_swap(f: f32) -> f32 {
    f32::from_bits(f.to_bits().swap_bytes())
}

fn short_no_swap(l: i16) -> i16 {
    l
}

fn long_no_swap(l: i32) -> i32 {
    l
}

fn float_no_swap(f: f32) -> f32 {
    f
}

fn detect() -> SwapTable {
    // the classic probe: lay down the bytes [1, 0] and see what short
    // comes back
    let probe = i16::from_ne_bytes([1, 0]);
    if probe == 1 {
        SwapTable {
            big_short: short_swap,
            little_short: short_no_swap,
            big_long: long_swap,
            little_long: long_no_swap,
            big_float: float_swap,
            little_float: float_no_swap,
            big_endian: false,
        }
    } else {
        SwapTable {
            big_short: short_no_swap,
            little_short: short_swap,
            big_long: long_no_swap,
            little_long: long_swap,
            big_float: float_no_swap,
            little_float: float_swap,
            big_endian: true,
        }
    }
}

fn table() -> &'static SwapTable {
    SWAP.get_or_init(detect)
}

/// Probe the byte ordering and install the dispatch table. Accessors
/// initialize lazily, so calling this is only needed to get the startup
/// diagnostic at a predictable time.
pub fn swap_init() {
    let t = table();
    log::info!(
        "byte ordering: {} endian",
        if t.big_endian { "big" } else { "little" }
    );
    debug_assert_eq!(little_short(i16::from_ne_bytes([1, 0])), 1);
}

pub fn is_big_endian() -> bool {
    table().big_endian
}

#[inline]
pub fn big_short(l: i16) -> i16 {
    (table().big_short)(l)
}

#[inline]
pub fn little_short(l: i16) -> i16 {
    (table().little_short)(l)
}

#[inline]
pub fn big_long(l: i32) -> i32 {
    (table().big_long)(l)
}

#[inline]
pub fn little_long(l: i32) -> i32 {
    (table().little_long)(l)
}

#[inline]
pub fn big_float(l: f32) -> f32 {
    (table().big_float)(l)
}

#[inline]
pub fn little_float(l: f32) -> f32 {
    (table().little_float)(l)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_swaps() {
        assert_eq!(short_swap(0x0102), 0x0201);
        assert_eq!(short_swap(short_swap(-1234)), -1234);
        assert_eq!(long_swap(0x01020304), 0x04030201);
        assert_eq!(long_swap(long_swap(i32::MIN)), i32::MIN);
        assert_eq!(float_swap(float_swap(3.5)), 3.5);
    }

    #[test]
    fn float_swap_preserves_bits() {
        let f = -123.456f32;
        assert_eq!(float_swap(f).to_bits(), f.to_bits().swap_bytes());
    }

    #[test]
    fn dispatch_matches_native_conversions() {
        // whichever endianness the host has, the table must agree with the
        // standard library's conversions
        for v in [0i16, 1, -1, 0x0102, i16::MAX, i16::MIN] {
            assert_eq!(big_short(v), v.to_be());
            assert_eq!(little_short(v), v.to_le());
        }
        for v in [0i32, 42, -42, 0x12345678, i32::MAX, i32::MIN] {
            assert_eq!(big_long(v), v.to_be());
            assert_eq!(little_long(v), v.to_le());
        }
    }

    #[test]
    fn little_float_identity_on_le_hosts() {
        if !is_big_endian() {
            assert_eq!(little_float(1.0), 1.0);
            assert_eq!(little_float(-3.25), -3.25);
        } else {
            assert_eq!(big_float(1.0), 1.0);
        }
    }

    #[test]
    fn probe_matches_target_endian() {
        assert_eq!(is_big_endian(), cfg!(target_endian = "big"));
    }

    #[test]
    fn init_self_test_holds() {
        swap_init();
        assert_eq!(little_short(i16::from_ne_bytes([1, 0])), 1);
    }
}
