use chrono::{Duration, Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::models::{Category, Course, CourseType, GradeRange};

pub const MIN_AGE_LOWER: u32 = 5;
pub const MIN_AGE_UPPER: u32 = 15;
pub const AGE_SPAN_LOWER: u32 = 1;
pub const AGE_SPAN_UPPER: u32 = 3;
pub const PRICE_LOWER: f64 = 20.0;
pub const PRICE_UPPER: f64 = 200.0;
pub const SESSION_DAYS_LOWER: i64 = 1;
pub const SESSION_DAYS_UPPER: i64 = 60;

/// Builds randomized course records.
pub struct CourseGenerator<R: Rng = StdRng> {
    rng: R,
}

impl CourseGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CourseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `count` courses with ids `1..=count`, scheduling sessions
    /// relative to `now`.
    pub fn generate(&mut self, count: u32, now: NaiveDateTime) -> Vec<Course> {
        info!("Generating {} courses (now: {})", count, now);

        let courses: Vec<Course> = (1..=count).map(|id| self.course(id, now)).collect();

        info!("Generated {} courses", courses.len());
        courses
    }

    /// Same as [`generate`](Self::generate), reading the local wall clock.
    pub fn generate_now(&mut self, count: u32) -> Vec<Course> {
        self.generate(count, Local::now().naive_local())
    }

    fn course(&mut self, id: u32, now: NaiveDateTime) -> Course {
        let min_age = self.rng.gen_range(MIN_AGE_LOWER..=MIN_AGE_UPPER);
        let max_age = min_age + self.rng.gen_range(AGE_SPAN_LOWER..=AGE_SPAN_UPPER);

        let course = Course {
            id,
            title: Course::title_for(id),
            description: Course::description_for(id),
            category: self.pick(&Category::ALL),
            course_type: self.pick(&CourseType::ALL),
            grade_range: self.pick(&GradeRange::ALL),
            min_age,
            max_age,
            price: round_cents(self.rng.gen_range(PRICE_LOWER..=PRICE_UPPER)),
            next_session_date: self.session_date(now),
        };

        debug!(
            "course {}: {} / {} / {} ages {}-{} price {}",
            course.id,
            course.category,
            course.course_type,
            course.grade_range,
            course.min_age,
            course.max_age,
            course.price
        );
        course
    }

    /// `values` is one of the closed `ALL` sets, never empty.
    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        *values
            .choose(&mut self.rng)
            .expect("closed value set is empty")
    }

    fn session_date(&mut self, now: NaiveDateTime) -> NaiveDateTime {
        let days = self.rng.gen_range(SESSION_DAYS_LOWER..=SESSION_DAYS_UPPER);
        let date = now + Duration::days(days);
        date.with_nanosecond(0).unwrap_or(date)
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
