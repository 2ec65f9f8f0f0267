#![allow(non_snake_case)]

mod util;
use util::{core_cycles, cycles_seed, median};

use bandersnatch::bandersnatch::{PointXtwFull, PointXtwSubgroup, PointEfghSubgroup,
    PointAxtwSubgroup, CurvePoint, PointConstruct, GlvExp};
use bandersnatch::field::{GFp, Scalar};
use num_bigint::BigInt;

fn bench_gf_mul() -> (f64, u8) {
    let seed = cycles_seed();
    let mut x = GFp::decode_reduce(&seed);
    let mut y = x + GFp::ONE;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..1000 {
            x *= y;
            y *= x;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 2000), x.encode32()[0])
}

fn bench_gf_invert() -> (f64, u8) {
    let seed = cycles_seed();
    let mut x = GFp::decode_reduce(&seed);
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            x = x.invert() + GFp::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 100), x.encode32()[0])
}

fn bench_gf_sqrt() -> (f64, u8) {
    let seed = cycles_seed();
    let mut x = GFp::decode_reduce(&seed);
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let (r, ok) = x.sqrt();
            x = r + GFp::from_u32(ok & 7);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 100), x.encode32()[0])
}

fn bench_add_xtw() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointXtwFull::BASE * s;
    let Q = PointXtwSubgroup::BASE;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..1000 {
            P += Q;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 1000), P.coordinates().0.encode32()[0])
}

fn bench_add_efgh() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointEfghSubgroup::BASE * s;
    let Q = PointAxtwSubgroup::BASE;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..1000 {
            P += Q;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 1000), P.coordinates().0.encode32()[0])
}

fn bench_double() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointXtwSubgroup::BASE * s;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..1000 {
            P.set_double();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 1000), P.coordinates().0.encode32()[0])
}

fn bench_endo() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointXtwSubgroup::BASE * s;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..1000 {
            P.set_endo();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 1000), P.coordinates().0.encode32()[0])
}

fn bench_mul_glv() -> (f64, u8) {
    let mut s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointXtwSubgroup::BASE;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..10 {
            P.set_mul_scalar(&s);
            if P.is_neutral() {
                s += Scalar::ZERO;
            } else {
                s += Scalar::ONE;
            }
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 10), s.encode32()[0])
}

fn bench_mul_naive() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut k = BigInt::from(s.to_biguint());
    let mut P = PointXtwSubgroup::BASE;
    let mut tt = [0; 20];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..10 {
            P.set_exp_naive(&k);
            k += 1;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 10), P.encode().map(|e| e[0]).unwrap_or(0))
}

fn bench_decode() -> (f64, u8) {
    let mut buf = cycles_seed();
    buf[31] &= 0x3F;
    let mut P = PointXtwSubgroup::NEUTRAL;
    let mut tt = [0; 100];
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            let r = P.set_decode(&buf);
            buf[0] = buf[0].wrapping_add(1);
            buf[1] = buf[1].wrapping_add(r.is_ok() as u8);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 100), buf[0])
}

fn bench_encode() -> (f64, u8) {
    let s = Scalar::decode_reduce(&cycles_seed());
    let mut P = PointXtwSubgroup::BASE * s;
    let mut tt = [0; 100];
    let mut x = 0u8;
    for i in 0..tt.len() {
        let begin = core_cycles();
        for _ in 0..100 {
            if let Ok(e) = P.encode() {
                x ^= e[0];
            }
            P = -P;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    (median(&mut tt, 100), x)
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_gf_mul();
    bx ^= x;
    println!("GFp mul:                          {:13.2}", v);
    let (v, x) = bench_gf_invert();
    bx ^= x;
    println!("GFp invert:                       {:13.2}", v);
    let (v, x) = bench_gf_sqrt();
    bx ^= x;
    println!("GFp sqrt:                         {:13.2}", v);
    let (v, x) = bench_add_xtw();
    bx ^= x;
    println!("Bandersnatch add (xtw):           {:13.2}", v);
    let (v, x) = bench_add_efgh();
    bx ^= x;
    println!("Bandersnatch add (efgh + axtw):   {:13.2}", v);
    let (v, x) = bench_double();
    bx ^= x;
    println!("Bandersnatch double:              {:13.2}", v);
    let (v, x) = bench_endo();
    bx ^= x;
    println!("Bandersnatch endo:                {:13.2}", v);
    let (v, x) = bench_mul_glv();
    bx ^= x;
    println!("Bandersnatch mul (GLV):           {:13.2}", v);
    let (v, x) = bench_mul_naive();
    bx ^= x;
    println!("Bandersnatch mul (naive):         {:13.2}", v);
    let (v, x) = bench_decode();
    bx ^= x;
    println!("Bandersnatch decode:              {:13.2}", v);
    let (v, x) = bench_encode();
    bx ^= x;
    println!("Bandersnatch encode:              {:13.2}", v);

    println!("{}", bx);
}
