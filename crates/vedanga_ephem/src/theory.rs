//! Truncated analytic planetary theory.
//!
//! Geocentric ecliptic longitudes for Sun, Moon, the five classical
//! planets, and the mean lunar node, referred to the mean equinox of
//! date. Series are truncated to the accuracy this engine needs:
//! Sun < 0.01°, Moon < 0.1°, planets < 0.5° over 1900–2100.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed) — Sun Ch. 25,
//! Moon Ch. 47, mean elements Ch. 31, obliquity Ch. 22.

use vedanga_time::J2000_JD;

use crate::body::Body;

/// Julian centuries of UT since J2000.0.
pub fn centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

fn norm360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn sin_d(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_d(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Mean obliquity of the ecliptic in degrees.
pub fn obliquity_deg(t: f64) -> f64 {
    23.439_291_1 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Sun's geometric mean longitude in degrees.
fn sun_mean_longitude(t: f64) -> f64 {
    norm360(280.46646 + 36000.76983 * t + 0.0003032 * t * t)
}

/// Sun's mean anomaly in degrees.
fn sun_mean_anomaly(t: f64) -> f64 {
    norm360(357.52911 + 35999.05029 * t - 0.0001537 * t * t)
}

/// Equation of center for the Sun, degrees.
fn sun_equation_of_center(t: f64, m: f64) -> f64 {
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * sin_d(m)
        + (0.019993 - 0.000101 * t) * sin_d(2.0 * m)
        + 0.000289 * sin_d(3.0 * m)
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    let l0 = sun_mean_longitude(t);
    let m = sun_mean_anomaly(t);
    let c = sun_equation_of_center(t, m);
    // Constant aberration correction; nutation is below our accuracy floor.
    norm360(l0 + c - 0.00569)
}

/// Earth's heliocentric longitude (degrees) and radius vector (AU).
fn earth_heliocentric(t: f64) -> (f64, f64) {
    let l0 = sun_mean_longitude(t);
    let m = sun_mean_anomaly(t);
    let c = sun_equation_of_center(t, m);
    let e = 0.016708634 - 0.000042037 * t;
    let v = m + c;
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * cos_d(v));
    (norm360(l0 + c + 180.0), r)
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Fundamental lunar arguments, degrees: (L', D, M, M', F).
fn lunar_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let lp = norm360(218.3164477 + 481_267.88123421 * t - 0.0015786 * t * t);
    let d = norm360(297.8501921 + 445_267.1114034 * t - 0.0018819 * t * t);
    let m = norm360(357.5291092 + 35_999.0502909 * t - 0.0001536 * t * t);
    let mp = norm360(134.9633964 + 477_198.8675055 * t + 0.0087414 * t * t);
    let f = norm360(93.2720950 + 483_202.0175233 * t - 0.0036539 * t * t);
    (lp, d, m, mp, f)
}

/// Geocentric ecliptic longitude of the Moon, degrees [0, 360).
///
/// Principal ELP terms only (evection, variation, annual equation and
/// the next tier down); max error under 0.05°.
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    let (lp, d, m, mp, f) = lunar_arguments(t);

    let dl = 6.288774 * sin_d(mp)
        + 1.274027 * sin_d(2.0 * d - mp)
        + 0.658314 * sin_d(2.0 * d)
        + 0.213618 * sin_d(2.0 * mp)
        - 0.185116 * sin_d(m)
        - 0.114332 * sin_d(2.0 * f)
        + 0.058793 * sin_d(2.0 * d - 2.0 * mp)
        + 0.057066 * sin_d(2.0 * d - m - mp)
        + 0.053322 * sin_d(2.0 * d + mp)
        + 0.045758 * sin_d(2.0 * d - m)
        - 0.040923 * sin_d(m - mp)
        - 0.034720 * sin_d(d)
        - 0.030383 * sin_d(m + mp)
        + 0.015327 * sin_d(2.0 * d - 2.0 * f)
        - 0.012528 * sin_d(mp + 2.0 * f)
        + 0.010980 * sin_d(mp - 2.0 * f);

    norm360(lp + dl)
}

/// Geocentric ecliptic latitude of the Moon, degrees. Used by rise/set.
pub fn moon_latitude_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    let (_lp, d, m, mp, f) = lunar_arguments(t);

    5.128122 * sin_d(f)
        + 0.280602 * sin_d(mp + f)
        + 0.277693 * sin_d(mp - f)
        + 0.173237 * sin_d(2.0 * d - f)
        + 0.055413 * sin_d(2.0 * d - mp + f)
        + 0.046271 * sin_d(2.0 * d - mp - f)
        + 0.032573 * sin_d(2.0 * d + f)
        + 0.017198 * sin_d(2.0 * mp + f)
        - 0.009117 * sin_d(m + f) // small solar perturbation pair
        - 0.008045 * sin_d(m - f)
}

/// Mean ascending lunar node (Rahu), degrees [0, 360). Retrograde.
pub fn mean_node_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    norm360(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0)
}

// ---------------------------------------------------------------------------
// Planets (mean Keplerian elements, equinox of date)
// ---------------------------------------------------------------------------

struct Elements {
    /// Mean longitude, deg.
    l: f64,
    /// Semi-major axis, AU.
    a: f64,
    /// Eccentricity.
    e: f64,
    /// Inclination, deg.
    i: f64,
    /// Longitude of ascending node, deg.
    node: f64,
    /// Longitude of perihelion, deg.
    peri: f64,
}

/// Mean orbital elements referred to the mean equinox of date.
/// Meeus Ch. 31, Table 31.a (linear + quadratic terms).
fn mean_elements(body: Body, t: f64) -> Option<Elements> {
    let e = match body {
        Body::Mercury => Elements {
            l: 252.250906 + 149_474.072_249_1 * t + 0.000303_50 * t * t,
            a: 0.387098310,
            e: 0.20563175 + 0.000020407 * t,
            i: 7.004986 + 0.0018215 * t,
            node: 48.330893 + 1.1861883 * t,
            peri: 77.456119 + 1.5564776 * t,
        },
        Body::Venus => Elements {
            l: 181.979801 + 58_519.213_030_2 * t + 0.000310_14 * t * t,
            a: 0.723329820,
            e: 0.00677192 - 0.000047765 * t,
            i: 3.394662 + 0.0010037 * t,
            node: 76.679920 + 0.9011206 * t,
            peri: 131.563703 + 1.4022288 * t,
        },
        Body::Mars => Elements {
            l: 355.433000 + 19_141.696_447_1 * t + 0.000310_52 * t * t,
            a: 1.523679342,
            e: 0.09340065 + 0.000090484 * t,
            i: 1.849726 - 0.0006011 * t,
            node: 49.558093 + 0.7720959 * t,
            peri: 336.060234 + 1.8410449 * t,
        },
        Body::Jupiter => Elements {
            l: 34.351519 + 3036.302_774_8 * t + 0.000223_30 * t * t,
            a: 5.202603209,
            e: 0.04849793 + 0.000163225 * t,
            i: 1.303267 - 0.0054965 * t,
            node: 100.464407 + 1.0209774 * t,
            peri: 14.331207 + 1.6126352 * t,
        },
        Body::Saturn => Elements {
            l: 50.077444 + 1223.511_068_6 * t + 0.000519_08 * t * t,
            a: 9.554909192,
            e: 0.05554814 - 0.000346641 * t,
            i: 2.488879 - 0.0037362 * t,
            node: 113.665503 + 0.8770880 * t,
            peri: 93.057237 + 1.9637613 * t,
        },
        _ => return None,
    };
    Some(e)
}

/// Solve Kepler's equation E − e·sin(E) = M by Newton iteration.
///
/// Converges in a handful of steps for planetary eccentricities.
fn kepler_solve(m_rad: f64, ecc: f64) -> f64 {
    let mut e = if ecc < 0.8 { m_rad } else { std::f64::consts::PI };
    for _ in 0..12 {
        let delta = (e - ecc * e.sin() - m_rad) / (1.0 - ecc * e.cos());
        e -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    e
}

/// Heliocentric ecliptic rectangular coordinates, AU.
fn heliocentric_xyz(el: &Elements) -> (f64, f64, f64) {
    let m = norm360(el.l - el.peri).to_radians();
    let ea = kepler_solve(m, el.e);

    // True anomaly and radius
    let v = 2.0
        * (((1.0 + el.e) / (1.0 - el.e)).sqrt() * (ea / 2.0).tan()).atan();
    let r = el.a * (1.0 - el.e * ea.cos());

    // Argument of latitude from the ascending node
    let u = v + (el.peri - el.node).to_radians();
    let node = el.node.to_radians();
    let inc = el.i.to_radians();

    let x = r * (node.cos() * u.cos() - node.sin() * u.sin() * inc.cos());
    let y = r * (node.sin() * u.cos() + node.cos() * u.sin() * inc.cos());
    let z = r * u.sin() * inc.sin();
    (x, y, z)
}

/// Geocentric ecliptic longitude of a classical planet, degrees [0, 360).
pub fn planet_longitude_deg(jd: f64, body: Body) -> Option<f64> {
    let t = centuries(jd);
    let el = mean_elements(body, t)?;
    let (x, y, _z) = heliocentric_xyz(&el);

    let (earth_lon, earth_r) = earth_heliocentric(t);
    let xe = earth_r * cos_d(earth_lon);
    let ye = earth_r * sin_d(earth_lon);

    let lambda = (y - ye).atan2(x - xe).to_degrees();
    Some(norm360(lambda))
}

/// Tropical geocentric longitude for any supported body, degrees [0, 360).
pub fn body_longitude_deg(jd: f64, body: Body) -> f64 {
    match body {
        Body::Sun => sun_longitude_deg(jd),
        Body::Moon => moon_longitude_deg(jd),
        Body::MeanNode => mean_node_deg(jd),
        planet => planet_longitude_deg(jd, planet)
            .unwrap_or_else(|| unreachable!("non-planet handled above")),
    }
}
