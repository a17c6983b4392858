//! Demo seed data: a small multi-level task tree.
//!
//! Mirrors the dataset the grid ships with for manual testing: three
//! columns and sixteen rows across four root subtrees, one of them
//! collapsed. Also used heavily by the test suites.

use crate::cell::{Cell, TreeCell};
use crate::column::Column;
use crate::row::Row;

/// The demo column set: the tree column plus two text columns.
pub fn demo_columns() -> Vec<Column> {
    vec![
        Column::new("id", 100).with_reorderable(true),
        Column::new("hash", 400).with_reorderable(true),
        Column::new("test", 400).with_reorderable(true),
    ]
}

fn row(cell: TreeCell, hash: &str, test: &str) -> Row {
    Row::new(vec![
        Cell::Tree(cell),
        Cell::text(hash),
        Cell::text(test),
    ])
}

/// The demo row tree:
///
/// ```text
/// 0 (expanded)
/// └── 1
/// 2 (collapsed)
/// └── 3 (expanded)
///     ├── 4
///     └── 5
/// 6 (expanded)
/// ├── 7
/// ├── 8
/// └── 9
/// 10 (expanded)
/// ├── 11
/// └── 12 (expanded)
///     ├── 13
///     ├── 14
///     └── 15
/// ```
pub fn demo_rows() -> Vec<Row> {
    let expanded = || TreeCell::root().with_expanded(true);

    let r0 = row(expanded(), "e989109363ec42610966f85fe9b065e6017058f7", "1234");
    let r1 = row(
        TreeCell::child_of(r0.row_id),
        "ey5seefv1o8soch1q50ztl30bzhubtb1xg6oklup",
        "",
    );
    let r2 = row(
        TreeCell::root(),
        "u61x66unzgl9xd5gre3bj7g8za8cb7ve4t7otz0e",
        "",
    );
    let r3 = row(
        TreeCell::child_of(r2.row_id).with_expanded(true),
        "v2dwm51y0k874x596axt4uz1if5qcv7etavg76va",
        "",
    );
    let r4 = row(
        TreeCell::child_of(r3.row_id),
        "jqk6nn3wktt2nwituttafuvpv7hlzo2grelvs7vo",
        "",
    );
    let r5 = row(
        TreeCell::child_of(r3.row_id),
        "ppsqily4doxz27uw6tznvc3qfvfhc37500k59jw9",
        "",
    );
    let r6 = row(expanded(), "uc75daha01rnk3dfcghvkgav13igsb87b0w1jzft", "");
    let r7 = row(
        TreeCell::child_of(r6.row_id),
        "bmwz5y30ypjgixzh3aic3vpjlnh1q1hrie2pv5mg",
        "",
    );
    let r8 = row(
        TreeCell::child_of(r6.row_id),
        "rc3hmvkwh4to6iq8mo68ju9vyx2zcmqbgn73zrw9",
        "",
    );
    let r9 = row(
        TreeCell::child_of(r6.row_id),
        "1ooxkvmvwotxicvawyh0wb1ur8jtin12egyayee8",
        "",
    );
    let r10 = row(expanded(), "fvgiizz61ysmiv2gn9por6izio575u557jyxz4xs", "");
    let r11 = row(
        TreeCell::child_of(r10.row_id),
        "rbicj7u5qxvkpqv2ti2bkthlw4yg1by4ht4c1wom",
        "",
    );
    let r12 = row(
        TreeCell::child_of(r10.row_id).with_expanded(true),
        "cunj4bkbl2gow91atjtfcwko1zmqp6813l8x626v",
        "",
    );
    let r13 = row(
        TreeCell::child_of(r12.row_id),
        "iwpnwef8mtzsjyu1srihdwispyrjxvb5197ey6cz",
        "",
    );
    let r14 = row(
        TreeCell::child_of(r12.row_id),
        "6wawna3wf02eggw27v8kgyclhla2c82apmdemay4",
        "",
    );
    let r15 = row(
        TreeCell::child_of(r12.row_id),
        "iwpnwef8mtzsjyu1srihdwispyrjxvb5197ey6cz",
        "end",
    );

    vec![
        r0, r1, r2, r3, r4, r5, r6, r7, r8, r9, r10, r11, r12, r13, r14, r15,
    ]
}
