pub mod card_action_buttons;
pub mod search_filter_panel;
pub mod search_input_top_bar;
pub mod search_result_item_card;
pub mod search_result_list_controls;
pub mod search_results_view;
