use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One synthetic course entry in the fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub grade_range: GradeRange,
    pub min_age: u32,
    pub max_age: u32,
    pub price: f64,
    #[serde(with = "session_date")]
    pub next_session_date: NaiveDateTime,
}

impl Course {
    pub fn title_for(id: u32) -> String {
        format!("Course Title {}", id)
    }

    pub fn description_for(id: u32) -> String {
        format!(
            "This is a detailed description for course {}. It covers various interesting topics.",
            id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Math,
    Science,
    Art,
    History,
    English,
    Music,
    #[serde(rename = "Physical Education")]
    PhysicalEducation,
    Technology,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Math,
        Category::Science,
        Category::Art,
        Category::History,
        Category::English,
        Category::Music,
        Category::PhysicalEducation,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::Science => "Science",
            Category::Art => "Art",
            Category::History => "History",
            Category::English => "English",
            Category::Music => "Music",
            Category::PhysicalEducation => "Physical Education",
            Category::Technology => "Technology",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    OneTime,
    Course,
    Club,
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [CourseType::OneTime, CourseType::Course, CourseType::Club];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::OneTime => "ONE_TIME",
            CourseType::Course => "COURSE",
            CourseType::Club => "CLUB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeRange {
    #[serde(rename = "1st-3rd")]
    FirstToThird,
    #[serde(rename = "4th-6th")]
    FourthToSixth,
    #[serde(rename = "7th-8th")]
    SeventhToEighth,
    #[serde(rename = "9th-12th")]
    NinthToTwelfth,
}

impl GradeRange {
    pub const ALL: [GradeRange; 4] = [
        GradeRange::FirstToThird,
        GradeRange::FourthToSixth,
        GradeRange::SeventhToEighth,
        GradeRange::NinthToTwelfth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeRange::FirstToThird => "1st-3rd",
            GradeRange::FourthToSixth => "4th-6th",
            GradeRange::SeventhToEighth => "7th-8th",
            GradeRange::NinthToTwelfth => "9th-12th",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GradeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `nextSessionDate` wire format. The trailing `Z` is a literal, the
/// timestamp itself is local wall-clock time.
pub mod session_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn format(date: &NaiveDateTime) -> String {
        date.format(FORMAT).to_string()
    }

    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, FORMAT)
    }

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Course {
        Course {
            id: 7,
            title: Course::title_for(7),
            description: Course::description_for(7),
            category: Category::PhysicalEducation,
            course_type: CourseType::OneTime,
            grade_range: GradeRange::NinthToTwelfth,
            min_age: 9,
            max_age: 11,
            price: 57.3,
            next_session_date: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(8, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Course Title 7");
        assert_eq!(value["category"], "Physical Education");
        assert_eq!(value["type"], "ONE_TIME");
        assert_eq!(value["gradeRange"], "9th-12th");
        assert_eq!(value["minAge"], 9);
        assert_eq!(value["maxAge"], 11);
        assert_eq!(value["price"], 57.3);
        assert_eq!(value["nextSessionDate"], "2024-03-09T08:05:00Z");
        assert_eq!(value.as_object().unwrap().len(), 10);
    }

    #[test]
    fn field_order_matches_fixture_layout() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"id\"",
            "\"title\"",
            "\"description\"",
            "\"category\"",
            "\"type\"",
            "\"gradeRange\"",
            "\"minAge\"",
            "\"maxAge\"",
            "\"price\"",
            "\"nextSessionDate\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reads_back_fixture_entry() {
        let raw = r#"{
            "id": 3,
            "title": "Course Title 3",
            "description": "This is a detailed description for course 3. It covers various interesting topics.",
            "category": "Technology",
            "type": "CLUB",
            "gradeRange": "1st-3rd",
            "minAge": 5,
            "maxAge": 8,
            "price": 199.99,
            "nextSessionDate": "2025-12-31T23:59:59Z"
        }"#;

        let course: Course = serde_json::from_str(raw).unwrap();
        assert_eq!(course.category, Category::Technology);
        assert_eq!(course.course_type, CourseType::Club);
        assert_eq!(course.grade_range, GradeRange::FirstToThird);
        assert_eq!(session_date::format(&course.next_session_date), "2025-12-31T23:59:59Z");
    }

    #[test]
    fn rejects_unknown_course_type() {
        let raw = serde_json::to_string(&sample())
            .unwrap()
            .replace("ONE_TIME", "WORKSHOP");
        assert!(serde_json::from_str::<Course>(&raw).is_err());
    }

    #[test]
    fn display_matches_wire_names() {
        for category in Category::ALL {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, category.to_string());
        }
        for course_type in CourseType::ALL {
            let wire = serde_json::to_value(course_type).unwrap();
            assert_eq!(wire, course_type.to_string());
        }
        for grade_range in GradeRange::ALL {
            let wire = serde_json::to_value(grade_range).unwrap();
            assert_eq!(wire, grade_range.to_string());
        }
    }
}
