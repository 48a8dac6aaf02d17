#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::OnceLock;
    use taskdeck::libs::service::{TagService, TaskService};
    use taskdeck::libs::task::{NewTask, Priority, TaskFilter, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct FilterTestContext;

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            FilterTestContext
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create(service: &mut TaskService, new: NewTask) -> i64 {
        service.create(&new).unwrap().id
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_list_ordering(_ctx: &mut FilterTestContext) {
        let mut service = TaskService::new().unwrap();

        let mut late = NewTask::new("order-late");
        late.due_date = Some(date(2027, 1, 10));
        let late = create(&mut service, late);

        let mut early_a = NewTask::new("order-early-a");
        early_a.due_date = Some(date(2027, 1, 5));
        let early_a = create(&mut service, early_a);

        let dateless = create(&mut service, NewTask::new("order-dateless"));

        let mut early_b = NewTask::new("order-early-b");
        early_b.due_date = Some(date(2027, 1, 5));
        let early_b = create(&mut service, early_b);

        let listed = service.list(&TaskFilter::default()).unwrap();

        // Each task appears exactly once
        for id in [late, early_a, dateless, early_b] {
            assert_eq!(listed.iter().filter(|t| t.id == id).count(), 1);
        }

        // Tasks with a due date precede every task without one
        let first_null = listed.iter().position(|t| t.due_date.is_none());
        if let Some(first_null) = first_null {
            assert!(listed[first_null..].iter().all(|t| t.due_date.is_none()));
        }

        let pos = |id: i64| listed.iter().position(|t| t.id == id).unwrap();

        // Ascending due date
        assert!(pos(early_a) < pos(late));
        assert!(pos(early_b) < pos(late));
        // Equal due dates: the newer (higher) id comes first
        assert!(pos(early_b) < pos(early_a));
        // No due date sorts last
        assert!(pos(dateless) > pos(late));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_single_field_filters(_ctx: &mut FilterTestContext) {
        let mut service = TaskService::new().unwrap();
        let mut tags = TagService::new().unwrap();

        let tag = tags.create("filter-single", None).unwrap();

        let mut tagged = NewTask::new("filter-tagged");
        tagged.tag_ids = vec![tag.id];
        tagged.priority = Priority::High;
        let tagged = create(&mut service, tagged);

        let plain = create(&mut service, NewTask::new("filter-plain"));
        let done = create(&mut service, NewTask::new("filter-done"));
        service
            .update(
                done,
                &TaskUpdate {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        // tag filter is an existential match on the tag set
        let by_tag = service
            .list(&TaskFilter {
                tag_id: Some(tag.id),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_tag.iter().map(|t| t.id).collect::<Vec<_>>(), vec![tagged]);

        let by_priority = service
            .list(&TaskFilter {
                priority: Some(Priority::High),
                ..Default::default()
            })
            .unwrap();
        assert!(by_priority.iter().any(|t| t.id == tagged));
        assert!(by_priority.iter().all(|t| t.priority == Priority::High));

        let by_completed = service
            .list(&TaskFilter {
                completed: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert!(by_completed.iter().any(|t| t.id == done));
        assert!(by_completed.iter().all(|t| t.completed));
        assert!(by_completed.iter().all(|t| t.id != plain));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_composition_intersects(_ctx: &mut FilterTestContext) {
        let mut service = TaskService::new().unwrap();
        let mut tags = TagService::new().unwrap();

        let tag = tags.create("filter-mix", None).unwrap();
        let complete = TaskUpdate {
            completed: Some(true),
            ..Default::default()
        };

        // Satisfies all three predicates
        let mut hit = NewTask::new("mix-hit");
        hit.priority = Priority::High;
        hit.tag_ids = vec![tag.id];
        let hit = create(&mut service, hit);
        service.update(hit, &complete).unwrap();

        // Each of these misses exactly one predicate
        let mut no_tag = NewTask::new("mix-no-tag");
        no_tag.priority = Priority::High;
        let no_tag = create(&mut service, no_tag);
        service.update(no_tag, &complete).unwrap();

        let mut low = NewTask::new("mix-low");
        low.priority = Priority::Low;
        low.tag_ids = vec![tag.id];
        let low = create(&mut service, low);
        service.update(low, &complete).unwrap();

        let mut open = NewTask::new("mix-open");
        open.priority = Priority::High;
        open.tag_ids = vec![tag.id];
        create(&mut service, open);

        let matched = service
            .list(&TaskFilter {
                completed: Some(true),
                priority: Some(Priority::High),
                tag_id: Some(tag.id),
            })
            .unwrap();

        assert_eq!(matched.iter().map(|t| t.id).collect::<Vec<_>>(), vec![hit]);
    }
}
