//! Fail-slow validation and apply/commit behaviour through the public traits.

use strata_tests::prelude::*;

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_mistake_is_reported_once_in_order() {
        // GIVEN: a fresh orders table
        let fx = TableFixture::new();

        // WHEN: an empty name and a negative id are staged
        let update = RegisterSnapshot::new(&fx.table).set_name("").set_id(-5);
        let err = update.apply().unwrap_err();

        // THEN: one validation failure lists both, in the order they were made
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert_eq!(update.error_collector().error_count(), 2);
        let kinds: Vec<_> = update.error_collector().errors().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ErrorKind::InvalidArgument, ErrorKind::InvalidArgument]);
        let name_pos = err.message().find("Name cannot be empty").unwrap();
        let id_pos = err.message().find("ID must be non-negative").unwrap();
        assert!(name_pos < id_pos);
    }

    #[test]
    fn test_apply_and_commit_agree() {
        // GIVEN: a builder with two recorded errors
        let fx = TableFixture::new();
        let mut update = RegisterSnapshot::new(&fx.table).set_name("").set_id(-1);

        // WHEN
        let apply_err = update.apply().unwrap_err();
        let commit_err = update.commit().unwrap_err();

        // THEN: same failure, nothing reached the catalog
        assert_eq!(apply_err, commit_err);
        assert_eq!(update.commit_state(), CommitState::Invalid);
        assert_eq!(fx.catalog.current_metadata("orders").unwrap().version, 0);
    }

    #[test]
    fn test_nested_errors_fold_into_builder() {
        // GIVEN: errors produced by another builder
        let fx = TableFixture::new();
        let nested = fx.table.update_properties().set("", "x");
        let mut update = RegisterSnapshot::new(&fx.table).set_name("nightly");

        // WHEN
        for err in nested.error_collector().errors() {
            update.add_existing_error(err.clone());
        }
        let err = update.apply().unwrap_err();

        // THEN
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert!(err.message().contains("Property key cannot be empty"));
    }

    #[test]
    fn test_clear_errors_allows_reuse() {
        // GIVEN
        let fx = TableFixture::new();
        let mut update = RegisterSnapshot::new(&fx.table).set_name("");
        assert!(update.has_errors());

        // WHEN
        update.clear_errors();
        let mut update = update.set_name("nightly").set_id(7);

        // THEN
        assert!(update.check_errors().is_ok());
        assert!(update.commit().is_ok());
    }
}

mod apply_and_commit {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preview_matches_staged_values_then_commits() {
        // GIVEN: valid name and id staged
        let fx = TableFixture::new();
        let mut update = RegisterSnapshot::new(&fx.table).set_name("nightly").set_id(42);

        // WHEN
        let preview = update.apply().unwrap();

        // THEN: preview matches and the table is untouched
        assert_eq!(
            preview,
            SnapshotRef {
                name: "nightly".to_string(),
                id: 42
            }
        );
        assert_eq!(fx.table.version(), 0);
        assert_eq!(update.commit_state(), CommitState::Pending);

        // WHEN: committed
        update.commit().unwrap();

        // THEN: the status reflects the commit and the cache was refreshed
        assert_eq!(update.commit_state(), CommitState::Committed);
        let metadata = fx.table.metadata();
        assert_eq!(metadata.version, 1);
        assert_eq!(metadata.property("snapshot.nightly.id"), Some("42"));
        assert_eq!(metadata.property("current-snapshot"), Some("nightly"));
        assert_eq!(fx.catalog.current_metadata("orders"), Some(metadata));
    }

    #[test]
    fn test_commit_through_untyped_handles() {
        // GIVEN: different update kinds behind one trait object type
        let fx = TableFixture::new();
        let mut updates: Vec<Box<dyn PendingUpdate + '_>> = vec![
            Box::new(fx.table.update_properties().set("tier", "gold")),
            Box::new(RegisterSnapshot::new(&fx.table).set_name("s1").set_id(1)),
            Box::new(fx.table.update_schema().add_column("region", PrimitiveType::String)),
        ];

        // WHEN
        for update in updates.iter_mut() {
            update.commit().unwrap();
        }

        // THEN
        let metadata = fx.table.metadata();
        assert_eq!(metadata.version, 3);
        assert_eq!(metadata.property("tier"), Some("gold"));
        assert!(metadata.schema.field_by_name("region").is_some());
    }

    #[test]
    fn test_missing_name_fails_mutation_check() {
        // GIVEN: no setter errors, but the update is incomplete
        let fx = TableFixture::new();
        let update = RegisterSnapshot::new(&fx.table).set_id(3);

        // WHEN
        let err = update.apply().unwrap_err();

        // THEN
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert_eq!(err.message(), "Snapshot name is required");
    }
}
