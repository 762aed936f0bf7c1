//! Commit outcomes against the catalog: conflicts, rejections, lost responses.

use strata_tests::prelude::*;

mod conflicts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stale_handle_loses_to_concurrent_commit() {
        // GIVEN: two handles on the same table, one commits first
        let fx = TableFixture::new();
        let other = fx.second_handle();
        other.update_properties().set("writer", "other").commit().unwrap();
        let before = fx.catalog.current_metadata("orders").unwrap();

        // WHEN: the stale handle commits
        let mut update = RegisterSnapshot::new(&fx.table).set_name("nightly").set_id(1);
        let err = update.commit().unwrap_err();

        // THEN: rejected, stored state is exactly the winner's
        assert_eq!(err.kind(), ErrorKind::CommitFailed);
        assert_eq!(update.commit_state(), CommitState::Rejected);
        assert_eq!(fx.catalog.current_metadata("orders"), Some(before.clone()));

        // AND: after a refresh the same update goes through
        fx.table.refresh().unwrap();
        assert_eq!(fx.table.metadata(), before);
        update.commit().unwrap();
        assert_eq!(update.commit_state(), CommitState::Committed);
        assert_eq!(fx.table.metadata().property("writer"), Some("other"));
        assert_eq!(fx.table.version(), 2);
    }

    #[test]
    fn test_rejected_commit_leaves_state_unchanged() {
        // GIVEN
        let fx = TableFixture::new();
        let before = fx.table.metadata();
        fx.catalog.fail_next_commit(CommitFault::Reject);

        // WHEN
        let mut update = fx.table.update_properties().set("tier", "gold");
        let err = update.commit().unwrap_err();

        // THEN
        assert_eq!(err.kind(), ErrorKind::CommitFailed);
        assert_eq!(fx.table.metadata(), before);
        assert_eq!(fx.catalog.current_metadata("orders"), Some(before));
    }
}

mod unknown_state {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lost_response_is_distinct_from_success_and_rejection() {
        // GIVEN
        let fx = TableFixture::new();
        let before = fx.table.metadata();
        fx.catalog.fail_next_commit(CommitFault::LostResponse);

        // WHEN
        let mut update = RegisterSnapshot::new(&fx.table).set_name("nightly").set_id(9);
        let err = update.commit().unwrap_err();

        // THEN
        assert_eq!(err.kind(), ErrorKind::CommitStateUnknown);
        assert_ne!(err.kind(), ErrorKind::CommitFailed);
        assert_eq!(update.commit_state(), CommitState::Unknown);
        assert!(update.commit_state().was_sent());
        assert_eq!(fx.table.metadata(), before);
    }
}

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_config_shapes_new_tables() {
        // GIVEN
        let config = CatalogConfig::new()
            .with_warehouse("memory://lake")
            .with_format_version(1)
            .with_default_property("owner", "finance");

        // WHEN
        let fx = TableFixture::with_config(config);

        // THEN
        let metadata = fx.table.metadata();
        assert_eq!(metadata.location, "memory://lake/orders");
        assert_eq!(metadata.format_version, 1);
        assert_eq!(metadata.property("owner"), Some("finance"));
        assert_eq!(metadata.schema, orders_schema());
    }
}
