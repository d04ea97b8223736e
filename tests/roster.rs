#[cfg(test)]
mod tests {
    use classwork::libs::roster::{is_done_sentinel, title_case, Grade, GradeError, Roster, RosterError, StudentName};

    fn grades(values: &[i64]) -> Vec<Grade> {
        values.iter().map(|v| Grade::new(*v).unwrap()).collect()
    }

    fn name(raw: &str) -> StudentName {
        StudentName::parse(raw).unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("mCDONALD"), "Mcdonald");
        assert_eq!(title_case("mary jane"), "Mary Jane");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case(""), "");
        // caseless letters break a run like punctuation does
        assert_eq!(title_case("中a"), "中A");
        assert_eq!(title_case("中ab"), "中Ab");
    }

    #[test]
    fn test_student_name_is_normalized() {
        assert_eq!(name("  bOB \t").as_str(), "Bob");
        assert_eq!(name("élodie").as_str(), "Élodie");
    }

    #[test]
    fn test_student_name_rejects_non_alphabetic() {
        for raw in ["", "   ", "mary jane", "r2d2", "o'neil", "anne-marie", "42"] {
            assert!(
                matches!(StudentName::parse(raw), Err(RosterError::InvalidName(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_add_student_grows_roster_by_one() {
        let mut roster = Roster::new();
        for (i, raw) in ["alice", "Bob", "CAROL", "  dave  "].iter().enumerate() {
            let student = roster.add_student(raw).unwrap();
            assert!(student.grades().is_empty());
            assert_eq!(roster.len(), i + 1);
        }
        let names: Vec<&str> = roster.students().iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave"]);
    }

    #[test]
    fn test_duplicate_normalized_name_is_rejected() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();

        let err = roster.add_student("  ALICE ").unwrap_err();
        assert_eq!(err, RosterError::DuplicateName(name("Alice")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_invalid_name_does_not_mutate_roster() {
        let mut roster = Roster::new();
        assert!(roster.add_student("john smith").is_err());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_grade_accepts_only_zero_to_hundred() {
        for value in [-1000, -1, 101, 250, i64::MAX, i64::MIN] {
            assert!(matches!(Grade::new(value), Err(GradeError::OutOfRange(_))), "{} accepted", value);
        }
        for value in [0, 1, 50, 99, 100] {
            assert_eq!(Grade::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn test_grade_parse() {
        assert_eq!(Grade::parse(" 87 ").unwrap().value(), 87);
        assert_eq!(Grade::parse("+5").unwrap().value(), 5);
        assert!(matches!(Grade::parse("-1"), Err(GradeError::OutOfRange(_))));
        assert!(matches!(Grade::parse("99999999999999999999999"), Err(GradeError::OutOfRange(_))));
        assert!(matches!(Grade::parse("eighty"), Err(GradeError::NotANumber(_))));
        assert!(matches!(Grade::parse("85.5"), Err(GradeError::NotANumber(_))));
        assert!(matches!(Grade::parse(""), Err(GradeError::NotANumber(_))));
    }

    #[test]
    fn test_done_sentinel_is_case_insensitive() {
        assert!(is_done_sentinel("done"));
        assert!(is_done_sentinel(" DONE "));
        assert!(is_done_sentinel("Done"));
        assert!(!is_done_sentinel("don"));
        assert!(!is_done_sentinel("100"));
    }

    #[test]
    fn test_record_grade_for_unknown_student() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();

        let err = roster.record_grade(&name("Bob"), Grade::new(90).unwrap()).unwrap_err();
        assert_eq!(err, RosterError::StudentNotFound(name("Bob")));
        assert!(roster.students()[0].grades().is_empty());
    }

    #[test]
    fn test_find_uses_normalized_name() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();

        assert_eq!(roster.find(" aLiCe ").unwrap().name().as_str(), "Alice");
        assert!(matches!(roster.find("bob"), Err(RosterError::StudentNotFound(_))));
        assert!(matches!(roster.find("al1ce"), Err(RosterError::InvalidName(_))));
    }

    #[test]
    fn test_average_of_mixed_grades_is_exact() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();
        let added = roster.record_grades(&name("Alice"), grades(&[100, 0, 50])).unwrap();

        assert_eq!(added, 3);
        assert_eq!(roster.get(&name("Alice")).unwrap().average(), Some(50.0));
    }

    #[test]
    fn test_average_survives_sums_beyond_u32() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();
        let count = (u32::MAX / 100) as usize + 1;
        roster
            .record_grades(&name("Alice"), std::iter::repeat(Grade::new(100).unwrap()).take(count))
            .unwrap();

        assert_eq!(roster.get(&name("Alice")).unwrap().average(), Some(100.0));
    }

    #[test]
    fn test_report_on_empty_roster() {
        assert_eq!(Roster::new().report().unwrap_err(), RosterError::NoStudents);
    }

    #[test]
    fn test_report_without_any_grades() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();
        roster.add_student("bob").unwrap();

        assert_eq!(roster.report().unwrap_err(), RosterError::NoGrades);
    }

    #[test]
    fn test_report_skips_students_without_grades() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();
        roster.add_student("bob").unwrap();
        roster.add_student("carol").unwrap();
        roster.record_grades(&name("Alice"), grades(&[90, 80])).unwrap();
        roster.record_grades(&name("Carol"), grades(&[60])).unwrap();

        let report = roster.report().unwrap();
        let names: Vec<&str> = report.averages.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert_eq!(report.averages[0].average, 85.0);
        assert_eq!(report.averages[1].average, 60.0);
        assert_eq!(report.max, 85.0);
        assert_eq!(report.min, 60.0);
        assert_eq!(report.overall, 72.5);
    }

    #[test]
    fn test_top_student() {
        let mut roster = Roster::new();
        roster.add_student("alice").unwrap();
        roster.add_student("bob").unwrap();
        roster.record_grades(&name("Alice"), grades(&[90, 80])).unwrap();
        roster.record_grades(&name("Bob"), grades(&[70])).unwrap();

        let top = roster.top_student().unwrap();
        assert_eq!(top.name, name("Alice"));
        assert_eq!(top.average, 85.0);
    }

    #[test]
    fn test_top_student_tie_goes_to_first_registered() {
        let mut roster = Roster::new();
        for raw in ["zed", "amy", "kim"] {
            roster.add_student(raw).unwrap();
        }
        roster.record_grades(&name("Zed"), grades(&[80])).unwrap();
        roster.record_grades(&name("Amy"), grades(&[70, 90])).unwrap();
        roster.record_grades(&name("Kim"), grades(&[60])).unwrap();

        assert_eq!(roster.top_student().unwrap().name, name("Zed"));
    }

    #[test]
    fn test_top_student_empty_states() {
        let mut roster = Roster::new();
        assert_eq!(roster.top_student().unwrap_err(), RosterError::NoStudents);

        roster.add_student("alice").unwrap();
        assert_eq!(roster.top_student().unwrap_err(), RosterError::NoGrades);
    }
}
