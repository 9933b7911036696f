//! Temporal inputs for kala bala.
//!
//! Sunrise and sunset are the horizon crossings of the Sun at its birth
//! declination, in local mean solar time (the equation of time is
//! ignored). Day or night, the elapsed fraction, the Vedic weekday and the
//! hora all come from the same [`DayFrame`].

use kundali_time::{calendar_to_jd, jd_to_calendar, weekday_from_jd};
use kundali_vedic::dignity::{WEEKDAY_LORDS, hora_lord};
use kundali_vedic::shadbala::KalaInputs;
use kundali_vedic::{Graha, normalize_360};

/// Altitude of the Sun's centre at rise and set: refraction plus semi-diameter.
const HORIZON_ALTITUDE_DEG: f64 = -0.833;

/// Local mean solar time in hours, [0, 24).
pub fn local_mean_hours(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    let ut_hours = (jd_ut + 0.5).rem_euclid(1.0) * 24.0;
    (ut_hours + longitude_east_deg / 15.0).rem_euclid(24.0)
}

/// Sunrise and sunset of one day, in local mean hours.
///
/// Under the midnight sun the day spans 00:00..24:00; in polar night
/// sunrise and sunset meet at noon and the day is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayFrame {
    pub sunrise: f64,
    pub sunset: f64,
}

impl DayFrame {
    pub fn new(latitude_deg: f64, sun_declination_deg: f64) -> Self {
        let (phi, dec) = (latitude_deg.to_radians(), sun_declination_deg.to_radians());
        let cos_h0 = (HORIZON_ALTITUDE_DEG.to_radians().sin() - phi.sin() * dec.sin())
            / (phi.cos() * dec.cos());
        let half_day_hours = cos_h0.clamp(-1.0, 1.0).acos().to_degrees() / 15.0;
        Self {
            sunrise: 12.0 - half_day_hours,
            sunset: 12.0 + half_day_hours,
        }
    }

    pub fn day_hours(&self) -> f64 {
        self.sunset - self.sunrise
    }

    pub fn is_daytime(&self, lmt_hours: f64) -> bool {
        lmt_hours >= self.sunrise && lmt_hours < self.sunset
    }

    /// Hours since the most recent sunrise, [0, 24).
    pub fn hours_since_sunrise(&self, lmt_hours: f64) -> f64 {
        (lmt_hours - self.sunrise).rem_euclid(24.0)
    }

    /// Fraction of the current day (or night) already elapsed.
    pub fn fraction(&self, lmt_hours: f64) -> f64 {
        let (since, span) = if self.is_daytime(lmt_hours) {
            (lmt_hours - self.sunrise, self.day_hours())
        } else {
            ((lmt_hours - self.sunset).rem_euclid(24.0), 24.0 - self.day_hours())
        };
        if span <= 0.0 {
            return 0.0;
        }
        (since / span).clamp(0.0, 1.0)
    }
}

/// Lord of the Vedic weekday, which starts at sunrise rather than midnight.
pub fn vedic_weekday_lord(jd_ut: f64, longitude_east_deg: f64, frame: &DayFrame) -> Graha {
    let jd_local = jd_ut + longitude_east_deg / 360.0;
    let shift = if local_mean_hours(jd_ut, longitude_east_deg) < frame.sunrise {
        1.0
    } else {
        0.0
    };
    WEEKDAY_LORDS[weekday_from_jd(jd_local - shift).index() as usize]
}

/// Planetary hour lord counted in whole hours from sunrise.
pub fn hora_lord_at(jd_ut: f64, longitude_east_deg: f64, frame: &DayFrame) -> Graha {
    let since_sunrise = frame.hours_since_sunrise(local_mean_hours(jd_ut, longitude_east_deg));
    hora_lord(
        vedic_weekday_lord(jd_ut, longitude_east_deg, frame),
        (since_sunrise.floor() as u8).min(23),
    )
}

/// Lords of the weekday on which the civil year and month began.
pub fn year_and_month_lords(jd_ut: f64) -> (Graha, Graha) {
    let (year, month, _) = jd_to_calendar(jd_ut);
    let lord_of = |m: u32| {
        let jd = calendar_to_jd(year, m, 1.5);
        WEEKDAY_LORDS[weekday_from_jd(jd).index() as usize]
    };
    (lord_of(1), lord_of(month))
}

/// Equatorial declination from ecliptic coordinates of date.
pub fn declination_deg(longitude_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let (l, b, e) = (
        longitude_deg.to_radians(),
        latitude_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin().to_degrees()
}

/// Everything kala bala needs about the birth moment.
///
/// `tropical` holds `(longitude, latitude)` of Surya..Shani.
pub fn kala_inputs(
    jd_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    sun_sidereal_deg: f64,
    moon_sidereal_deg: f64,
    tropical: &[(f64, f64); 7],
    obliquity_deg: f64,
) -> KalaInputs {
    let declinations = tropical.map(|(lon, lat)| declination_deg(lon, lat, obliquity_deg));
    let frame = DayFrame::new(latitude_deg, declinations[0]);
    let lmt = local_mean_hours(jd_ut, longitude_east_deg);
    let (year_lord, month_lord) = year_and_month_lords(jd_ut);
    KalaInputs {
        is_daytime: frame.is_daytime(lmt),
        day_night_fraction: frame.fraction(lmt),
        moon_sun_elongation: normalize_360(moon_sidereal_deg - sun_sidereal_deg),
        year_lord,
        month_lord,
        weekday_lord: vedic_weekday_lord(jd_ut, longitude_east_deg, &frame),
        hora_lord: hora_lord_at(jd_ut, longitude_east_deg, &frame),
        declinations,
    }
}
