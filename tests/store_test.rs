use course_hub::events::StoreEvent;
use course_hub::models::{CourseId, FileRef, MaterialTag};
use course_hub::seed::seed_courses;
use course_hub::{CourseStore, StoreError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded() -> CourseStore {
    CourseStore::with_rng(seed_courses(), StdRng::seed_from_u64(2025))
}

#[test]
fn test_fresh_store_always_has_four_courses() {
    for _ in 0..3 {
        assert_eq!(CourseStore::new().len(), 4);
    }
}

#[test]
fn test_each_add_course_grows_by_one() {
    let mut store = seeded();
    for i in 0..5 {
        let before = store.len();
        let course = store.add_course(format!("INF {}", 300 + i), "Elective", "Staff");
        assert_eq!(store.len(), before + 1);
        assert!(course.lectures.is_empty());
    }
}

#[test]
fn test_any_insert_order_ends_ascending() {
    let orders: [&[u32]; 4] = [&[5, 2], &[2, 5], &[30, 1, 15, 7], &[4, 3, 2, 1]];

    for order in orders {
        let mut store = seeded();
        let id = store.add_course("INF 999", "Ordering", "Staff").id;
        for number in order {
            store
                .add_lecture(id, *number, format!("L{number}"), &[])
                .expect("add lecture");
        }

        let numbers: Vec<u32> = store
            .course(id)
            .expect("course")
            .lectures
            .iter()
            .map(|l| l.number)
            .collect();
        let mut expected = order.to_vec();
        expected.sort_unstable();
        assert_eq!(numbers, expected);
    }
}

#[test]
fn test_unknown_course_errors_before_mutation() {
    let mut store = seeded();
    let mut rx = store.subscribe();
    let before = store.lecture_count();

    let err = store
        .add_lecture(CourseId::new(), 1, "Ghost", &[FileRef::from("a.pdf")])
        .expect_err("unknown course");

    assert!(matches!(err, StoreError::CourseNotFound(_)));
    assert_eq!(store.lecture_count(), before);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_lecture_event_follows_upload() {
    let mut store = seeded();
    let mut rx = store.subscribe();
    let id = store.courses()[3].id;

    let lecture = store
        .add_lecture(
            id,
            3,
            "Pricing",
            &[FileRef::from("prices.CSV"), FileRef::from("talk.mov")],
        )
        .expect("add lecture");
    assert_eq!(
        lecture.materials,
        vec![MaterialTag::Spreadsheet, MaterialTag::Video]
    );

    let event = rx.try_recv().expect("event");
    assert!(matches!(
        event.as_ref(),
        StoreEvent::LectureAdded { number: 3, revision: 1, .. }
    ));
}
