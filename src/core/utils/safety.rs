//! Zero-Cost Safety Macros
//!
//! "Roll Cage" indexing: debug checks in dev, raw speed in prod.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use granula_engine::fast;
//!
//! let idx = 2;
//!
//! let words = vec![0u32; 5];
//! // Read: fast!(slice, [index])
//! let cell = *fast!(words, [idx]);
//! assert_eq!(cell, 0);
//!
//! let mut words = vec![0u32; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(words, [idx] = 0xFF00_0005);
//! assert_eq!(words[idx], 0xFF00_0005);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Grid accessors lean on this so the per-cell hot path stays branch-free in
/// release builds while development keeps clear panic messages.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            // Debug: Normal access with bounds check
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            // Release: Unsafe unchecked access
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            // Debug: Normal access with bounds check
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            // Release: Unsafe unchecked access
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let words = vec![1u32, 2, 3, 4, 5];
        let val = *fast!(words, [2]);
        assert_eq!(val, 3);
    }

    #[test]
    fn test_fast_write() {
        let mut words = vec![1u32, 2, 3, 4, 5];
        fast!(words, [2] = 100);
        assert_eq!(words[2], 100);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let words = vec![1u32, 2, 3];
        let _ = *fast!(words, [10]); // Should panic in debug
    }
}
