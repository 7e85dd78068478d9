use super::*;

// =============================================================
// Pagination / ordering
// =============================================================

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(6), 1);
    assert_eq!(page_count(7), 2);
    assert_eq!(page_count(13), 3);
}

#[test]
fn ordering_param_prefixes_descending() {
    assert_eq!(ordering_param(SortField::Id, SortDirection::Asc), "id");
    assert_eq!(ordering_param(SortField::Price, SortDirection::Desc), "-shoePrice");
}

#[test]
fn catalog_sort_maps_to_backend_ordering() {
    assert_eq!(CatalogSort::Default.ordering(), None);
    assert_eq!(CatalogSort::PriceAsc.ordering().as_deref(), Some("shoePrice"));
    assert_eq!(CatalogSort::PriceDesc.ordering().as_deref(), Some("-shoePrice"));
}

#[test]
fn catalog_sort_unknown_option_is_default() {
    assert_eq!(CatalogSort::from_option_value("descending"), CatalogSort::PriceDesc);
    assert_eq!(CatalogSort::from_option_value("sideways"), CatalogSort::Default);
}

// =============================================================
// ShoeQuery
// =============================================================

#[test]
fn shoe_query_omits_empty_parts() {
    assert_eq!(ShoeQuery::page(2).to_query_string(), "page=2");
    assert_eq!(ShoeQuery::page(1).with_search("   ").to_query_string(), "page=1");
}

#[test]
fn shoe_query_includes_ordering_and_search() {
    let query = ShoeQuery::page(3).with_ordering(Some("-shoePrice".to_owned())).with_search("jordan");
    assert_eq!(query.to_query_string(), "page=3&ordering=-shoePrice&search=jordan");
}

#[test]
fn shoe_query_escapes_search_terms() {
    let query = ShoeQuery::page(1).with_search("air max & co");
    let encoded = query.to_query_string();
    assert!(!encoded.contains(" & "));
    let decoded: ShoeQuery = serde_qs::from_str(&encoded).unwrap();
    assert_eq!(decoded.search.as_deref(), Some("air max & co"));
}

#[test]
fn shoe_query_page_is_at_least_one() {
    assert_eq!(ShoeQuery::page(0).page, 1);
}

// =============================================================
// ListingParams <-> URL
// =============================================================

#[test]
fn listing_params_default_from_empty_query() {
    assert_eq!(ListingParams::from_query(""), ListingParams::default());
    assert_eq!(ListingParams::from_query("?"), ListingParams::default());
}

#[test]
fn listing_params_parse_all_fields() {
    let params = ListingParams::from_query("?page=4&sort=shoePrice&dir=desc&q=dunk");
    assert_eq!(
        params,
        ListingParams { page: 4, field: SortField::Price, direction: SortDirection::Desc, search: "dunk".to_owned() }
    );
}

#[test]
fn listing_params_bad_values_fall_back_individually() {
    let params = ListingParams::from_query("page=zero&sort=colour&dir=desc");
    assert_eq!(params.page, 1);
    assert_eq!(params.field, SortField::Id);
    assert_eq!(params.direction, SortDirection::Desc);

    assert_eq!(ListingParams::from_query("page=0").page, 1);
}

#[test]
fn listing_params_tolerate_repeats_and_bad_escapes() {
    let params = ListingParams::from_query("page=3&page=9&q=%FF&sort=shoePrice");
    assert_eq!(params.page, 3);
    assert_eq!(params.field, SortField::Price);
    assert_eq!(params.search, "\u{FFFD}");
}

#[test]
fn listing_params_survive_url_round_trip() {
    let params = ListingParams::default()
        .with_field(SortField::Price)
        .with_direction(SortDirection::Desc)
        .with_search("air force")
        .with_page(3);
    assert_eq!(ListingParams::from_query(&params.to_query()), params);
}

#[test]
fn listing_params_omit_blank_search_from_url() {
    assert_eq!(ListingParams::default().to_query(), "page=1&sort=id&dir=asc");
}

#[test]
fn changing_sort_or_search_resets_page() {
    let base = ListingParams::default().with_page(5);
    assert_eq!(base.clone().with_field(SortField::Price).page, 1);
    assert_eq!(base.clone().with_direction(SortDirection::Desc).page, 1);
    assert_eq!(base.clone().with_search("x").page, 1);
    assert_eq!(base.with_page(2).page, 2);
}

#[test]
fn backend_query_carries_ordering_and_search() {
    let params = ListingParams::from_query("page=2&sort=shoePrice&dir=desc&q=max");
    let query = params.backend_query();
    assert_eq!(query.page, 2);
    assert_eq!(query.ordering.as_deref(), Some("-shoePrice"));
    assert_eq!(query.search.as_deref(), Some("max"));
}

// =============================================================
// Text / media helpers
// =============================================================

#[test]
fn truncate_words_cuts_long_text() {
    assert_eq!(truncate_words("Black White University Red", 3), "Black White University...");
    assert_eq!(truncate_words("Black White", 3), "Black White");
    assert_eq!(truncate_words("", 3), "");
}

#[test]
fn media_url_rewrites_local_prefix() {
    assert_eq!(media_url(Some("http://localhost:8000/media/a.png")), "/media/a.png");
    assert_eq!(media_url(Some("https://cdn.example.com/a.png")), "https://cdn.example.com/a.png");
    assert_eq!(media_url(Some("")), "");
    assert_eq!(media_url(None), "");
}

#[test]
fn format_price_adds_currency() {
    assert_eq!(format_price("12,795.00"), "₹ 12,795.00");
}

// =============================================================
// Route helpers
// =============================================================

#[test]
fn search_path_round_trips_term() {
    let path = search_path("  air max ");
    assert_eq!(path, "/searchResults?q=air+max");
    let query = path.split_once('?').map(|(_, q)| q).unwrap_or_default();
    assert_eq!(search_term_from_query(query), "air max");
}

#[test]
fn search_term_missing_is_empty() {
    assert_eq!(search_term_from_query(""), "");
    assert_eq!(search_term_from_query("?other=1"), "");
    assert_eq!(search_term_from_query("?x=%FF&q=dunk&q=max"), "dunk");
}

#[test]
fn record_id_parses_digits_only() {
    assert_eq!(parse_record_id(Some("12")), Some(12));
    assert_eq!(parse_record_id(Some("abc")), None);
    assert_eq!(parse_record_id(Some("-1")), None);
    assert_eq!(parse_record_id(None), None);
}

#[test]
fn record_paths() {
    assert_eq!(product_path(7), "/shoeDetails/7");
    assert_eq!(edit_shoe_path(7), "/editShoe/7");
}

#[test]
fn admin_path_embeds_listing_query() {
    let params = ListingParams::default().with_search("dunk").with_page(3);
    assert_eq!(params.admin_path(), format!("/allDataForAdmin?{}", params.to_query()));
}

#[test]
fn visible_pages_stay_in_range() {
    assert_eq!(visible_pages(1, 0, 5), Vec::<u64>::new());
    assert_eq!(visible_pages(1, 3, 5), vec![1, 2, 3]);
    assert_eq!(visible_pages(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible_pages(6, 10, 5), vec![4, 5, 6, 7, 8]);
    assert_eq!(visible_pages(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(visible_pages(99, 10, 5), vec![6, 7, 8, 9, 10]);
}
