#[cfg(test)]
mod tests {
    use crate::api::{Difficulty, MatrixData, PracticeSet, QuestionId, Selection, SetId};
    use crate::db::sample_practice_sets;
    use crate::services::compute_matrix_data;

    #[test]
    fn test_set_id_new() {
        let id = SetId::new("set-42");
        assert_eq!(id.as_str(), "set-42");
        assert_eq!(id.to_string(), "set-42");
    }

    #[test]
    fn test_set_id_equality_and_ordering() {
        let id1 = SetId::from("a");
        let id2 = SetId::from("a".to_string());
        let id3 = SetId::from("b");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert!(id1 < id3);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&QuestionId::new("q-7")).unwrap();
        assert_eq!(json, "\"q-7\"");

        let back: SetId = serde_json::from_str("\"set-01\"").unwrap();
        assert_eq!(String::from(back), "set-01");
    }

    #[test]
    fn test_practice_set_round_trips_camel_case() {
        let set = sample_practice_sets().remove(0);
        let value = serde_json::to_value(&set).unwrap();
        assert!(value.get("dateCompleted").is_some());
        assert!(value.get("type").is_some());

        let back: PracticeSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_matrix_data_payload_shape() {
        let sets = sample_practice_sets();
        let data = compute_matrix_data(
            &sets,
            &Default::default(),
            &Selection::Unselected.click("Algebra", Difficulty::Easy),
        );

        let value = serde_json::to_value(&data).unwrap();
        for key in [
            "grid_rows",
            "topics",
            "difficulties",
            "subjects",
            "topic_totals",
            "difficulty_totals",
            "grand_total",
            "selected_cell_data",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["difficulties"][3], "Very Hard");

        let back: MatrixData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }
}
