use ratatui::widgets::ListState;
use ratatui::Frame;

use crate::app::{ContentState, DialogController};
use crate::model::DialogPhase;

use super::{
    asset_grid, banner, dialogs, layout,
    legend::{self, LegendContext},
    search,
    status_bar::{self, PageInfo},
    toast,
};

/// Main render function - orchestrates all UI rendering
///
/// `enabled` is false when the host has disabled the asset field; the grid
/// is then drawn dimmed.
pub fn render(f: &mut Frame, controller: &DialogController, enabled: bool) {
    let size = f.area();
    let model = &controller.model;

    let legend_ctx = LegendContext {
        vim_mode: model.ui.vim_mode,
        search_mode: model.ui.search_mode,
        has_search_query: !model.view.search().is_empty(),
        can_retry: matches!(controller.phase(), DialogPhase::Error(e) if e.is_retryable()),
        has_locales: !model.catalog.locales.is_empty(),
    };
    let legend_height = legend::calculate_legend_height(size.width, &legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height);

    banner::render_banner(f, layout_info.banner_area, model.selection.len());

    search::render_locale_box(
        f,
        layout_info.locale_area,
        model.catalog.selected_locale_name(),
        model.catalog.locales.len() > 1,
    );

    let view = controller.current_view();
    let match_count = model.catalog.assets_loaded.then_some(view.matched);
    search::render_search_input(
        f,
        layout_info.search_area,
        model.view.search(),
        model.ui.search_mode,
        match_count,
        model.ui.vim_mode,
    );

    let columns = model.ui.grid_columns;
    match controller.content() {
        ContentState::Loading => {
            asset_grid::render_skeleton(f, layout_info.content_area, columns, controller.phase().as_str());
        }
        ContentState::Failed(error) => {
            dialogs::render_error_panel(f, layout_info.content_area, error);
        }
        ContentState::NoLocales => {
            dialogs::render_empty_state(
                f,
                layout_info.content_area,
                "This space has no locales",
                "Assets cannot be listed without a locale.",
            );
        }
        ContentState::NoAssets => {
            dialogs::render_empty_state(
                f,
                layout_info.content_area,
                "No assets found",
                "This locale has no assets with a file.",
            );
        }
        ContentState::NoMatches => {
            dialogs::render_empty_state(
                f,
                layout_info.content_area,
                "No assets match your search",
                "Try a different title, or press Esc to clear the search.",
            );
        }
        ContentState::Cards(view) => {
            asset_grid::render_asset_grid(
                f,
                layout_info.content_area,
                &view.items,
                model.ui.cursor,
                columns,
                |id| controller.is_selected(id),
                enabled,
            );
        }
    }

    let page_info = PageInfo {
        page_index: view.page_index,
        page_count: view.page_count,
        page_size: model.view.page_size().get(),
        matched: view.matched,
        renderable: view.renderable,
        selected: model.selection.len(),
    };
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        controller.phase().as_str(),
        &page_info,
        controller.config().pagination.as_str(),
        controller.cursor_asset(),
        &controller.config().thumbnail,
    );

    legend::render_legend(f, layout_info.legend_area, &legend_ctx);

    if let Some(picker) = &model.ui.locale_picker {
        let mut temp_state = ListState::default();
        temp_state.select(Some(picker.selected_index));
        dialogs::render_locale_picker(
            f,
            &model.catalog.locales,
            &model.catalog.selected_locale,
            &mut temp_state,
        );
    }

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
