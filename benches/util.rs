#[cfg(target_arch = "x86_64")]
pub fn core_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(target_arch = "aarch64")]
pub fn core_cycles() -> u64 {
    use core::arch::asm;
    let mut x: u64;
    unsafe {
        asm!("dsb sy", "mrs {}, pmccntr_el0", out(reg) x);
    }
    x
}

// Other architectures report nanoseconds instead of cycles.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn core_cycles() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as u64,
        Err(_) => 0,
    }
}

/// 32 bytes derived from the current cycle counter.
pub fn cycles_seed() -> [u8; 32] {
    let z = core_cycles();
    let mut seed = [0u8; 32];
    for i in 0..4 {
        let w = z.wrapping_mul(2 * (i as u64) + 1);
        seed[(8 * i)..(8 * i + 8)].copy_from_slice(&w.to_le_bytes());
    }
    seed
}

/// Median of the measured times, divided by the number of inner
/// iterations.
pub fn median(tt: &mut [u64], n: usize) -> f64 {
    tt.sort();
    (tt[tt.len() >> 1] as f64) / (n as f64)
}
