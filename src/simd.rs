#[inline(always)]
pub(crate) fn dispatch<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "simd")]
    {
        pulp::Arch::new().dispatch(f)
    }
    #[cfg(not(feature = "simd"))]
    {
        f()
    }
}

/// Run `f` under runtime target-feature dispatch when `len` is large enough to
/// pay for it. The code inside `f` is unchanged, so results do not depend on
/// which branch is taken.
#[inline(always)]
pub(crate) fn dispatch_if_large<R>(len: usize, f: impl FnOnce() -> R) -> R {
    if len >= 64 {
        dispatch(f)
    } else {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_closure() {
        let data = [1.0f64, -2.0, 3.0];
        assert_eq!(dispatch(|| data.iter().map(|x| x.abs()).sum::<f64>()), 6.0);
        assert_eq!(dispatch_if_large(3, || 7), 7);
        assert_eq!(dispatch_if_large(128, || 9), 9);
    }
}
