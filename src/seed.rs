//! Courses every fresh store starts with.

use crate::models::{Course, CourseColor, Lecture, MaterialTag};

pub const DEFAULT_SEMESTER: &str = "Spring 2025";

pub fn seed_courses() -> Vec<Course> {
    use MaterialTag::*;

    vec![
        Course::new(
            "INF 202",
            "Database Management Systems 1",
            "Arunaz Makhabayeva",
            DEFAULT_SEMESTER,
            CourseColor::Blue,
            vec![
                Lecture::new(
                    1,
                    "Introduction to DBMS",
                    vec![Slides, Video],
                    "How data management moved from flat files to database systems, and \
                     what a DBMS adds: abstraction, data independence, efficient access, \
                     integrity and concurrent use. Surveys hierarchical, network, relational, \
                     object-oriented and NoSQL systems and their use in banking, healthcare, \
                     education and e-commerce, leading into the relational model.",
                ),
                Lecture::new(
                    2,
                    "Entity-Relationship Model",
                    vec![Slides, PracticeProblems],
                    "Conceptual design with entities, attributes and relationships. Covers \
                     strong and weak entities, composite attributes, cardinalities, \
                     participation constraints and primary keys, then specialization, \
                     generalization and aggregation. Practice problems turn informal \
                     descriptions into ER diagrams.",
                ),
                Lecture::new(
                    3,
                    "Relational Model",
                    vec![Slides, Video, Quiz],
                    "Mapping ER designs to relations: tuples, attributes, domains and key \
                     constraints. Introduces relational algebra (selection, projection, join, \
                     union, difference), functional dependencies and normalization through \
                     1NF, 2NF and 3NF, with the performance trade-offs normalization brings.",
                ),
            ],
        ),
        Course::new(
            "INF 395",
            "Advanced project for information systems",
            "Sufyan Mustafa",
            DEFAULT_SEMESTER,
            CourseColor::Pink,
            vec![
                Lecture::new(
                    1,
                    "Intoduction to Advanced project for IS",
                    vec![Slides, Video],
                    "...",
                ),
                Lecture::new(
                    2,
                    "Entity-Relationship Model",
                    vec![Slides, PracticeProblems],
                    "Entities, relationships, attributes, and ER diagramming techniques.",
                ),
            ],
        ),
        Course::new(
            "INF 207",
            "Introduction to Business for IT",
            "Assyl Abilakim",
            DEFAULT_SEMESTER,
            CourseColor::Teal,
            vec![
                Lecture::new(
                    1,
                    "Business Fundamentals",
                    vec![Slides, CaseStudy],
                    "Basic business concepts, organizational structures, and business processes.",
                ),
                Lecture::new(
                    2,
                    "IT in Business",
                    vec![Slides, Video, Article],
                    "Role of information technology in modern businesses and digital \
                     transformation.",
                ),
            ],
        ),
        Course::new(
            "INF 207",
            "Introduction to Business for IT",
            "Surajyo Raziyeva",
            DEFAULT_SEMESTER,
            CourseColor::Purple,
            vec![
                Lecture::new(
                    1,
                    "Business Strategy",
                    vec![Slides, CaseStudy],
                    "Strategic planning, competitive advantage, and business models.",
                ),
                Lecture::new(
                    2,
                    "Marketing Principles",
                    vec![Slides, GroupProject],
                    "Core marketing concepts, customer segmentation, and digital marketing \
                     strategies.",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn four_seed_courses() {
        let courses = seed_courses();
        assert_eq!(courses.len(), 4);
        assert_eq!(courses[0].code, "INF 202");
        assert_eq!(courses[0].lectures.len(), 3);
    }

    #[test]
    fn seed_ids_are_distinct() {
        let courses = seed_courses();
        let ids: HashSet<_> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), courses.len());

        let lecture_ids: HashSet<_> = courses
            .iter()
            .flat_map(|c| c.lectures.iter().map(|l| l.id))
            .collect();
        assert_eq!(lecture_ids.len(), 9);
    }

    #[test]
    fn seed_lectures_are_sorted_and_unique() {
        for course in seed_courses() {
            let numbers: Vec<u32> = course.lectures.iter().map(|l| l.number).collect();
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(numbers, sorted, "course {}", course.title);
        }
    }
}
