//! Weekly timetable builder.
//!
//! # Algorithm
//!
//! 1. Grid range: earliest meeting start hour through latest meeting end
//!    hour, whole hours, one row per 5 minutes. With no meetings the range
//!    is degenerate (23..=0) and the grid is empty.
//! 2. For each meeting, place a [`CourseBlock`] in the row where it starts,
//!    in its day's column, and mark the next `num_blocks - 1` rows of that
//!    column as spanned over.
//!
//! The builder does not re-check conflicts. Overlapping meetings overwrite
//! each other (last write wins), so pass schedules that came out of the
//! planner.

use log::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{Course, CourseBlock, TimeSlot, TimeTable};

/// Lays out `courses` on a weekly 5-minute grid.
///
/// Accepts anything that yields course references: a `&[Course]`, a
/// `&Schedule`, or `schedule.iter()`.
///
/// # Errors
/// - [`PlannerError::MalformedTimeSlot`] for a meeting that ends before it starts.
/// - [`PlannerError::ClockAlignment`] for a meeting that starts off-grid or
///   lasts a non-multiple of 5 minutes.
pub fn build_time_table<'a, I>(courses: I) -> Result<TimeTable>
where
    I: IntoIterator<Item = &'a Course>,
{
    let courses: Vec<&Course> = courses.into_iter().collect();

    let (earliest, latest) = hour_range(&courses);
    let mut table = TimeTable::spanning(earliest, latest);

    for course in &courses {
        for slot in &course.scheduled_times {
            place_meeting(&mut table, course, slot)?;
        }
    }

    debug!(
        "built timetable for {} courses: {} rows ({earliest:02}:00-{latest:02}:55)",
        courses.len(),
        table.len()
    );

    Ok(table)
}

/// Earliest start hour and latest end hour over all meetings.
///
/// Defaults to `(23, 0)` when there are no meetings.
fn hour_range(courses: &[&Course]) -> (u8, u8) {
    courses
        .iter()
        .flat_map(|c| c.scheduled_times.iter())
        .fold((23, 0), |(earliest, latest), slot| {
            (earliest.min(slot.start.hour()), latest.max(slot.end.hour()))
        })
}

fn place_meeting(table: &mut TimeTable, course: &Course, slot: &TimeSlot) -> Result<()> {
    if !slot.is_well_formed() {
        return Err(PlannerError::MalformedTimeSlot {
            input: slot.to_string(),
            reason: format!("course '{}' meeting ends before it starts", course.id),
        });
    }

    let misaligned = || PlannerError::ClockAlignment {
        course_id: course.id.clone(),
        slot: slot.to_string(),
        minutes: slot.duration_minutes(),
    };
    let num_blocks = slot.num_blocks().ok_or_else(misaligned)?;
    let start = table.row_index(slot.start).ok_or_else(misaligned)?;
    let day = slot.day.index();

    let rows = table.rows_mut();

    let cell = &mut rows[start].courses_at_time[day];
    if !cell.is_empty() {
        warn!(
            "timetable cell {} {} already occupied; '{}' overwrites it",
            slot.day,
            slot.start.label(),
            course.course_number
        );
    }
    cell.block = Some(CourseBlock {
        num_blocks,
        course_number: course.course_number.clone(),
        course_name: course.course_name.clone(),
        professors: course.professors.clone(),
        color: course.color.clone(),
    });
    cell.spanned_over = false;

    for row in rows.iter_mut().skip(start + 1).take(num_blocks as usize - 1) {
        row.courses_at_time[day].spanned_over = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, Professor, Schedule, Weekday, BLOCKS_PER_HOUR};
    use proptest::prelude::*;

    fn course(id: &str, slots: &str) -> Course {
        Course::new(id, format!("NUM {id}"), format!("Course {id}"))
            .with_slots(slots)
            .unwrap()
    }

    #[test]
    fn test_single_fifty_minute_meeting() {
        let x = course("X", "Mon 0900-0950")
            .with_professor(Professor::new("Knuth"))
            .with_color("blue");
        let table = build_time_table([&x]).unwrap();
        let rows = table.rows();
        let mon = Weekday::Mon.index();

        // Whole-hour grid; the meeting itself spans rows 0..10.
        assert_eq!(rows.len(), BLOCKS_PER_HOUR); // 09:00..=09:55
        assert_eq!(rows[0].time_str, "09:00");

        let first = &rows[0].courses_at_time[mon];
        let block = first.block.as_ref().unwrap();
        assert_eq!(block.num_blocks, 10);
        assert_eq!(block.course_number, "NUM X");
        assert_eq!(block.color, "blue");
        assert_eq!(block.professors[0].last, "Knuth");
        assert!(!first.spanned_over);

        for row in &rows[1..10] {
            assert!(row.courses_at_time[mon].spanned_over, "{}", row.time_str);
            assert!(row.courses_at_time[mon].block.is_none());
        }
        for row in &rows[10..] {
            assert!(row.courses_at_time[mon].is_empty());
        }
        for row in rows {
            for day in Weekday::ALL.iter().filter(|d| **d != Weekday::Mon) {
                assert!(row.courses_at_time[day.index()].is_empty());
            }
        }
    }

    #[test]
    fn test_range_covers_whole_hours() {
        let courses = vec![
            course("a", "Tue 1030-1145"),
            course("b", "Thu 0800-0915, Fri 1500-1600"),
        ];
        let table = build_time_table(&courses).unwrap();

        // 08:00 through 16:55
        assert_eq!(table.len(), (16 - 8 + 1) * BLOCKS_PER_HOUR);
        assert_eq!(table.rows()[0].time_str, "08:00");
        assert_eq!(table.rows().last().unwrap().time_str, "16:55");
    }

    #[test]
    fn test_blocks_land_in_day_columns() {
        let courses = vec![course("a", "Mon 0930-1045, Wed 0930-1045")];
        let table = build_time_table(&courses).unwrap();
        let row = table.row_at(ClockTime::new(9, 30).unwrap()).unwrap();

        assert_eq!(
            row.courses_at_time[Weekday::Mon.index()]
                .block
                .as_ref()
                .unwrap()
                .num_blocks,
            15
        );
        assert!(row.courses_at_time[Weekday::Wed.index()].block.is_some());
        assert!(row.courses_at_time[Weekday::Tue.index()].is_empty());

        let last = table.row_at(ClockTime::new(10, 40).unwrap()).unwrap();
        assert!(last.courses_at_time[Weekday::Mon.index()].spanned_over);
        let after = table.row_at(ClockTime::new(10, 45).unwrap()).unwrap();
        assert!(after.courses_at_time[Weekday::Mon.index()].is_empty());
    }

    #[test]
    fn test_empty_input() {
        let table = build_time_table(&Vec::<Course>::new()).unwrap();
        assert!(table.is_empty());

        let online = vec![Course::new("o", "ONLINE", "Async")];
        assert!(build_time_table(&online).unwrap().is_empty());
    }

    #[test]
    fn test_accepts_schedule() {
        let courses = vec![course("a", "Mon 0900-0950"), course("b", "Mon 1000-1050")];
        let schedule = Schedule::new(courses.iter().collect());
        let table = build_time_table(&schedule).unwrap();
        assert_eq!(table.len(), 2 * BLOCKS_PER_HOUR);
    }

    #[test]
    fn test_last_write_wins() {
        let courses = vec![course("a", "Mon 0900-0950"), course("b", "Mon 0900-0920")];
        let table = build_time_table(&courses).unwrap();
        let cell = &table.rows()[0].courses_at_time[Weekday::Mon.index()];
        let block = cell.block.as_ref().unwrap();
        assert_eq!(block.course_number, "NUM b");
        assert_eq!(block.num_blocks, 4);
    }

    #[test]
    fn test_rejects_misaligned_duration() {
        let odd = Course::new("odd", "X", "X").with_slot(TimeSlot::new(
            Weekday::Mon,
            ClockTime::new(9, 0).unwrap(),
            ClockTime::new(9, 52).unwrap(),
        ));
        let err = build_time_table([&odd]).unwrap_err();
        assert_eq!(
            err,
            PlannerError::ClockAlignment {
                course_id: "odd".into(),
                slot: "Mon 0900-0952".into(),
                minutes: 52,
            }
        );
    }

    #[test]
    fn test_rejects_inverted_slot() {
        let inverted = Course::new("inv", "X", "X").with_slot(TimeSlot::new(
            Weekday::Fri,
            ClockTime::new(11, 0).unwrap(),
            ClockTime::new(10, 0).unwrap(),
        ));
        assert!(matches!(
            build_time_table([&inverted]),
            Err(PlannerError::MalformedTimeSlot { .. })
        ));
    }

    #[test]
    fn test_serialized_grid_shape() {
        let courses = vec![course("a", "Sun 0900-0910")];
        let table = build_time_table(&courses).unwrap();
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json.as_array().unwrap().len(), BLOCKS_PER_HOUR);
        assert_eq!(json[0]["timeStr"], "09:00");
        assert_eq!(json[0]["coursesAtTime"][0]["numBlocks"], 2);
        assert_eq!(json[1]["coursesAtTime"][0]["spannedOver"], true);
        assert_eq!(json[2]["coursesAtTime"][0], serde_json::json!({}));
    }

    proptest! {
        #[test]
        fn prop_grid_size_matches_hour_range(
            meetings in prop::collection::vec((0usize..7, 6u32..20, 1u32..=24), 1..6)
        ) {
            let courses: Vec<Course> = meetings
                .iter()
                .enumerate()
                .map(|(i, &(day, hour, blocks))| {
                    let start = ClockTime::new(hour as u8, 0).unwrap();
                    let end_min = hour * 60 + blocks * 5;
                    let end = ClockTime::new((end_min / 60) as u8, (end_min % 60) as u8).unwrap();
                    Course::new(format!("c{i}"), "X", "X")
                        .with_slot(TimeSlot::new(Weekday::ALL[day], start, end))
                })
                .collect();

            let earliest = courses.iter().map(|c| c.scheduled_times[0].start.hour()).min().unwrap();
            let latest = courses.iter().map(|c| c.scheduled_times[0].end.hour()).max().unwrap();
            let table = build_time_table(&courses).unwrap();

            prop_assert_eq!(
                table.len(),
                (latest - earliest + 1) as usize * BLOCKS_PER_HOUR
            );
        }
    }
}
