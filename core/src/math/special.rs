//! Bessel functions of the first kind for integer order.
//!
//! J0 and J1 use rational approximations below |x| = 8 and the Hankel
//! asymptotic form above it. Higher orders are built by recurrence: upward
//! from J0/J1 when |x| exceeds the order, otherwise Miller's downward
//! recurrence normalised with the identity J0 + 2(J2 + J4 + ...) = 1.

const MILLER_ACCURACY: f64 = 160.0;
const RESCALE_ABOVE: f64 = 1.0e10;
const RESCALE_BY: f64 = 1.0e-10;

pub fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = 57_568_490_574.0
            + y * (-13_362_590_354.0
                + y * (651_619_640.7
                    + y * (-11_214_424.18 + y * (77_392.330_17 + y * (-184.905_245_6)))));
        let den = 57_568_490_411.0
            + y * (1_029_532_985.0
                + y * (9_494_680.718 + y * (59_272.648_53 + y * (267.853_271_2 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785_398_164;
        let p = 1.0
            + y * (-0.109_862_862_7e-2
                + y * (0.273_451_040_7e-4 + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
        let q = -0.156_249_999_5e-1
            + y * (0.143_048_876_5e-3
                + y * (-0.691_114_765_1e-5 + y * (0.762_109_516_1e-6 - y * 0.934_935_152e-7)));
        (0.636_619_772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q)
    }
}

pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = x
            * (72_362_614_232.0
                + y * (-7_895_059_235.0
                    + y * (242_396_853.1
                        + y * (-2_972_611.439 + y * (15_704.482_60 + y * (-30.160_366_06))))));
        let den = 144_725_228_442.0
            + y * (2_300_535_178.0
                + y * (18_583_304.74 + y * (99_447.433_94 + y * (376.999_139_7 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356_194_491;
        let p = 1.0
            + y * (0.183_105e-2
                + y * (-0.351_639_649_6e-4 + y * (0.245_752_017_4e-5 + y * (-0.240_337_019e-6))));
        let q = 0.046_874_999_95
            + y * (-0.200_269_087_3e-3
                + y * (0.844_919_909_6e-5 + y * (-0.882_289_87e-6 + y * 0.105_787_412e-6)));
        let ans = (0.636_619_772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q);
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}

/// Bessel function of the first kind, `J_order(x)`, for any integer order.
pub fn bessel_jn(order: i32, x: f64) -> f64 {
    let n = order.unsigned_abs() as usize;
    let value = bessel_jn_unsigned(n, x);
    if order < 0 && n % 2 == 1 {
        -value
    } else {
        value
    }
}

fn bessel_jn_unsigned(n: usize, x: f64) -> f64 {
    match n {
        0 => return bessel_j0(x),
        1 => return bessel_j1(x),
        _ => {}
    }

    let ax = x.abs();
    if ax == 0.0 {
        return 0.0;
    }

    let tox = 2.0 / ax;
    let magnitude = if ax > n as f64 {
        let mut bjm = bessel_j0(ax);
        let mut bj = bessel_j1(ax);
        for j in 1..n {
            let bjp = j as f64 * tox * bj - bjm;
            bjm = bj;
            bj = bjp;
        }
        bj
    } else {
        let start = 2 * ((n + (MILLER_ACCURACY * n as f64).sqrt() as usize) / 2);
        let mut even_term = false;
        let mut bjp = 0.0;
        let mut bj = 1.0;
        let mut ans = 0.0;
        let mut sum = 0.0;
        for j in (1..=start).rev() {
            let bjm = j as f64 * tox * bj - bjp;
            bjp = bj;
            bj = bjm;
            if bj.abs() > RESCALE_ABOVE {
                bj *= RESCALE_BY;
                bjp *= RESCALE_BY;
                ans *= RESCALE_BY;
                sum *= RESCALE_BY;
            }
            if even_term {
                sum += bj;
            }
            even_term = !even_term;
            if j == n {
                ans = bjp;
            }
        }
        sum = 2.0 * sum - bj;
        ans / sum
    };

    if x < 0.0 && n % 2 == 1 {
        -magnitude
    } else {
        magnitude
    }
}
