use std::sync::Arc;

use linkflow::store::{
    Action, GroupId, Link, LinkGroup, LinkPatch, LinkRef, LinkStatus, Modal, Store, View,
    seed::default_seed,
};

fn seeded() -> Store {
    Store::new(default_seed())
}

fn a3() -> LinkRef {
    LinkRef::new(GroupId(1), "a3")
}

#[cfg(test)]
mod group_tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_expansion() {
        let mut store = seeded();
        for group_id in [GroupId(1), GroupId(2)] {
            let original = store.group(group_id).unwrap().is_expanded;
            store.toggle_group_expansion(group_id);
            assert_ne!(store.group(group_id).unwrap().is_expanded, original);
            store.toggle_group_expansion(group_id);
            assert_eq!(store.group(group_id).unwrap().is_expanded, original);
        }
    }

    #[test]
    fn test_toggle_affects_only_target_group() {
        let mut store = seeded();
        store.toggle_group_expansion(GroupId(2));
        assert!(store.group(GroupId(1)).unwrap().is_expanded);
        assert!(store.group(GroupId(2)).unwrap().is_expanded);
    }

    #[test]
    fn test_blank_rename_is_rejected() {
        let mut store = seeded();
        let group = store.group(GroupId(1)).unwrap().clone();
        store.open_modal(Modal::EditGroup(group));

        for blank in ["", "   ", "\t\n"] {
            let err = store.rename_group(GroupId(1), blank).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(
                store.group(GroupId(1)).unwrap().name,
                "Campaign \"Back to School 2024\""
            );
            assert!(matches!(store.state().modal, Some(Modal::EditGroup(_))));
        }
    }

    #[test]
    fn test_rename_missing_group_still_closes_modal() {
        let mut store = seeded();
        let group = store.group(GroupId(2)).unwrap().clone();
        store.open_modal(Modal::EditGroup(group));

        store.rename_group(GroupId(42), "Nothing").unwrap();
        assert!(store.state().modal.is_none());
        assert!(store.state().groups.iter().all(|g| g.name != "Nothing"));
    }

    #[test]
    fn test_delete_group_removes_all_links_at_once() {
        let mut store = seeded();
        let before = store.snapshot();
        let removed = store.group(GroupId(1)).unwrap().links.len();

        store.delete_group(GroupId(1));

        assert_eq!(store.state().groups.len(), 1);
        assert_eq!(store.total_links(), before.total_links() - removed);
        assert!(store.group(GroupId(1)).is_none());
        // one transition: the previous snapshot still has everything
        assert_eq!(before.groups.len(), 2);
    }

    #[test]
    fn test_delete_group_clears_selection_inside_it() {
        let mut store = seeded();
        store.select_link_for_detail(a3());
        store.delete_group(GroupId(1));
        assert!(store.state().selected.is_none());
        assert!(store.selected_link().is_none());
    }
}

#[cfg(test)]
mod link_tests {
    use super::*;

    #[test]
    fn test_update_link_changes_only_key_and_url() {
        let mut store = seeded();
        let before = store.snapshot();

        store
            .update_link(&a3(), LinkPatch::new("/x", "https://e.com"))
            .unwrap();

        let link = store.link(&a3()).unwrap();
        assert_eq!(link.key, "/x");
        assert_eq!(link.original_url, "https://e.com");
        assert_eq!(link.clicks, 10500);
        assert_eq!(link.status, LinkStatus::Active);

        // every other link and group is unchanged
        for (old, new) in before.groups.iter().zip(store.state().groups.iter()) {
            assert_eq!(old.name, new.name);
            assert_eq!(old.is_expanded, new.is_expanded);
            for (old_link, new_link) in old.links.iter().zip(new.links.iter()) {
                if old_link.id.as_str() != "a3" || old.id != GroupId(1) {
                    assert_eq!(old_link, new_link);
                }
            }
        }

        // the earlier snapshot is untouched
        assert_eq!(before.link(&a3()).unwrap().key, "/tiktok");
    }

    #[test]
    fn test_update_link_trims_values() {
        let mut store = seeded();
        store
            .update_link(&a3(), LinkPatch::new("  /tt ", " https://tt.com  "))
            .unwrap();
        let link = store.link(&a3()).unwrap();
        assert_eq!(link.key, "/tt");
        assert_eq!(link.original_url, "https://tt.com");
    }

    #[test]
    fn test_update_blank_url_is_rejected() {
        let mut store = seeded();
        let before = store.snapshot();
        let err = store
            .update_link(&a3(), LinkPatch::new("/tt", "  "))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_update_missing_link_closes_modal() {
        let mut store = seeded();
        let link = store.link(&a3()).unwrap().clone();
        store.open_modal(Modal::EditLink {
            target: a3(),
            link,
        });

        let ghost = LinkRef::new(GroupId(1), "zz");
        store
            .update_link(&ghost, LinkPatch::new("/x", "https://e.com"))
            .unwrap();
        assert!(store.state().modal.is_none());
        assert_eq!(store.link(&a3()).unwrap().key, "/tiktok");
    }

    #[test]
    fn test_duplicate_keys_are_allowed() {
        let mut store = seeded();
        store
            .update_link(&a3(), LinkPatch::new("/fb", "https://e.com"))
            .unwrap();
        let keys: Vec<_> = store.state().groups[0]
            .links
            .iter()
            .map(|l| l.key.as_str())
            .collect();
        assert_eq!(keys, vec!["/ytb", "/fb", "/fb"]);
    }

    #[test]
    fn test_delete_link_keeps_emptied_group() {
        let mut store = Store::new(vec![LinkGroup::new(
            GroupId(7),
            "Solo",
            vec![Link::new("s1", "/solo", "https://solo.dev", 3, LinkStatus::Active)],
        )]);

        store.delete_link(&LinkRef::new(GroupId(7), "s1"));

        let group = store.group(GroupId(7)).unwrap();
        assert!(group.links.is_empty());
        assert_eq!(store.state().groups.len(), 1);
    }

    #[test]
    fn test_delete_link_removes_exactly_one() {
        let mut store = seeded();
        let target = LinkRef::new(GroupId(2), "b1");
        store.delete_link(&target);

        assert_eq!(store.total_links(), 4);
        assert!(store.link(&target).is_none());
        assert!(store.link(&LinkRef::new(GroupId(2), "b2")).is_some());
    }

    #[test]
    fn test_same_link_id_in_other_group_is_untouched() {
        let mut store = Store::new(vec![
            LinkGroup::new(
                GroupId(1),
                "One",
                vec![Link::new("x", "/one", "https://one.dev", 1, LinkStatus::Active)],
            ),
            LinkGroup::new(
                GroupId(2),
                "Two",
                vec![Link::new("x", "/two", "https://two.dev", 2, LinkStatus::Active)],
            ),
        ]);

        store.delete_link(&LinkRef::new(GroupId(2), "x"));
        assert_eq!(store.link(&LinkRef::new(GroupId(1), "x")).unwrap().key, "/one");
        assert_eq!(store.total_links(), 1);
    }
}

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_select_then_dashboard_clears_selection() {
        let mut store = seeded();
        store.select_link_for_detail(a3());
        assert_eq!(store.state().view, View::KeyStats);
        assert_eq!(store.selected_link().unwrap().clicks, 10500);

        store.set_active_view(View::Dashboard);
        assert!(store.state().selected.is_none());
        assert!(store.selected_link().is_none());
    }

    #[test]
    fn test_selection_follows_live_data() {
        let mut store = seeded();
        store.select_link_for_detail(a3());
        store
            .update_link(&a3(), LinkPatch::new("/tt", "https://tt.com"))
            .unwrap();
        assert_eq!(store.selected_link().unwrap().key, "/tt");

        store.delete_link(&a3());
        assert!(store.selected_link().is_none());
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut store = seeded().sidebar_open(false);
        assert!(!store.state().sidebar_open);
        store.toggle_sidebar();
        assert!(store.state().sidebar_open);
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_dispatch_maps_actions() {
        let mut store = seeded();

        store.dispatch(Action::ToggleGroup(GroupId(2))).unwrap();
        assert!(store.group(GroupId(2)).unwrap().is_expanded);

        store.dispatch(Action::SelectLink(a3())).unwrap();
        assert_eq!(store.state().view, View::KeyStats);

        store.dispatch(Action::SetView(View::GlobalStats)).unwrap();
        assert!(store.state().selected.is_none());

        store.dispatch(Action::DeleteGroup(GroupId(2))).unwrap();
        assert_eq!(store.state().groups.len(), 1);

        let before = store.snapshot();
        store.dispatch(Action::Noop).unwrap();
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_dispatch_surfaces_validation() {
        let mut store = seeded();
        let err = store
            .dispatch(Action::RenameGroup {
                group_id: GroupId(1),
                name: "  ".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut store = seeded();
        let a = store.group(GroupId(1)).unwrap();
        assert_eq!(a.links.len(), 3);
        let b = store.group(GroupId(2)).unwrap();
        assert_eq!(b.links.len(), 2);
        assert!(b.links.iter().any(|l| l.status == LinkStatus::Archived));

        store.dispatch(Action::ToggleGroup(GroupId(1))).unwrap();
        assert!(!store.group(GroupId(1)).unwrap().is_expanded);

        let link = store.link(&a3()).unwrap().clone();
        store
            .dispatch(Action::OpenModal(Modal::EditLink {
                target: a3(),
                link,
            }))
            .unwrap();
        store
            .dispatch(Action::UpdateLink {
                target: a3(),
                patch: LinkPatch::new("/tt", "https://tiktok.com/campaign-name"),
            })
            .unwrap();
        let edited = store.link(&a3()).unwrap();
        assert_eq!(edited.key, "/tt");
        assert_eq!(edited.clicks, 10500);
        assert!(store.state().modal.is_none());

        store.dispatch(Action::DeleteGroup(GroupId(2))).unwrap();
        assert_eq!(store.state().groups.len(), 1);
        assert_eq!(store.total_links(), 3);
    }
}
