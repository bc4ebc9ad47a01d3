use taskboard_rs::core::table::{PAGE_SIZE_OPTIONS, status_cell_class};
use taskboard_rs::core::{TablePagination, task_table_columns};
use taskboard_rs::error::BoardError;

#[test]
fn columns_keep_the_grid_order_and_widths() {
    let columns = task_table_columns();
    let fields: Vec<&str> = columns.iter().map(|column| column.field).collect();
    assert_eq!(
        fields,
        [
            "title",
            "description",
            "status",
            "priority",
            "tags",
            "startDate",
            "dueDate",
            "author",
            "assignee"
        ]
    );

    assert_eq!(columns[0].width_px, 100);
    assert_eq!(columns[1].width_px, 200);
    assert_eq!(columns[3].header, "Priority");
    assert_eq!(columns[3].width_px, 75);
}

#[test]
fn table_status_palette_differs_from_the_card_palette() {
    assert_eq!(status_cell_class("To Do"), "bg-blue-100 text-blue-800");
    assert_eq!(
        status_cell_class("Work In Progress"),
        "bg-green-100 text-green-800"
    );
    assert_eq!(
        status_cell_class("under review"),
        "bg-orange-100 text-orange-800"
    );
    assert_eq!(status_cell_class("Completed"), "bg-blue-900 text-white");
    assert_eq!(status_cell_class("unknown"), "bg-gray-100 text-gray-800");
}

#[test]
fn pagination_defaults_match_the_grid_model() {
    let pagination = TablePagination::default();
    assert_eq!(pagination.page, 0);
    assert_eq!(pagination.page_size, 10);
    assert_eq!(PAGE_SIZE_OPTIONS, [5, 10, 20]);
}

#[test]
fn page_size_must_be_an_advertised_option() {
    let mut pagination = TablePagination::default();
    pagination.set_page_size(20).expect("listed size");
    assert_eq!(pagination.page_size, 20);

    let err = pagination.set_page_size(25).expect_err("unlisted size");
    assert!(matches!(err, BoardError::InvalidConfig(_)));
    assert_eq!(pagination.page_size, 20);
}

#[test]
fn slice_range_walks_pages_and_clips_the_tail() {
    let mut pagination = TablePagination::default();
    pagination.set_page_size(5).expect("listed size");

    assert_eq!(pagination.slice_range(12), 0..5);
    pagination.set_page(1);
    assert_eq!(pagination.slice_range(12), 5..10);
    pagination.set_page(2);
    assert_eq!(pagination.slice_range(12), 10..12);
    pagination.set_page(3);
    assert_eq!(pagination.slice_range(12), 12..12);
}

#[test]
fn zero_page_size_from_host_state_reads_as_one_row_per_page() {
    // The field is public and serde-deserializable, so a zero size can
    // arrive without passing set_page_size.
    let pagination: TablePagination =
        serde_json::from_str(r#"{"page":2,"page_size":0}"#).expect("parse host state");
    assert_eq!(pagination.page_size, 0);

    assert_eq!(pagination.page_count(12), 12);
    assert_eq!(pagination.slice_range(12), 2..3);
    assert_eq!(pagination.slice_range(0), 0..0);

    let mut pagination = pagination;
    pagination.clamp_to(3);
    assert_eq!(pagination.page, 2);
}

#[test]
fn page_count_and_clamping_track_the_row_total() {
    let mut pagination = TablePagination::default();
    assert_eq!(pagination.page_count(0), 0);
    assert_eq!(pagination.page_count(10), 1);
    assert_eq!(pagination.page_count(11), 2);

    pagination.set_page(5);
    pagination.clamp_to(11);
    assert_eq!(pagination.page, 1);
}
