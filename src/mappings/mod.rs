//! The built-in path mapping table.
//!
//! Each entry pairs a known-incorrect relative import path with its corrected
//! form. Order is semantic: the rewrite engine applies entries strictly in
//! declaration order, so an entry whose target is itself a later entry's key
//! gets rewritten again in the same pass. Keys are exact strings - `./x` and
//! `x` are distinct keys even when they name the same file.

/// A single old-path -> new-path substitution pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    /// The incorrect relative path as it appears between the quotes.
    pub old: &'static str,
    /// The corrected relative path to emit in its place.
    pub new: &'static str,
}

const fn m(old: &'static str, new: &'static str) -> MappingEntry {
    MappingEntry { old, new }
}

/// The full correction table for the project layout migration.
static BUILTIN_MAPPINGS: &[MappingEntry] = &[
    // Models
    m("../core/models/note.dart", "../../../core/models/note.dart"),
    m("../../models/note.dart", "../../../core/models/note.dart"),
    m("../models/note.dart", "../../core/models/note.dart"),
    m("../core/models/page.dart", "../../../core/models/page.dart"),
    m("../../models/page.dart", "../../../core/models/page.dart"),
    m("../models/page.dart", "../../core/models/page.dart"),
    m("../core/models/flash_card.dart", "../../../core/models/flash_card.dart"),
    m("../../models/flash_card.dart", "../../../core/models/flash_card.dart"),
    m("../models/flash_card.dart", "../../core/models/flash_card.dart"),
    m("../core/models/dictionary.dart", "../../../core/models/dictionary.dart"),
    m("../../models/dictionary.dart", "../../../core/models/dictionary.dart"),
    m("../models/dictionary.dart", "../../core/models/dictionary.dart"),
    m("../core/models/processed_text.dart", "../../../core/models/processed_text.dart"),
    m("../../models/processed_text.dart", "../../../core/models/processed_text.dart"),
    m("../models/processed_text.dart", "../../core/models/processed_text.dart"),
    m("../core/models/processing_status.dart", "../../../core/models/processing_status.dart"),
    m("../../models/processing_status.dart", "../../../core/models/processing_status.dart"),
    m("../models/processing_status.dart", "../../core/models/processing_status.dart"),
    m("../core/models/text_unit.dart", "../../../core/models/text_unit.dart"),
    m("../../models/text_unit.dart", "../../../core/models/text_unit.dart"),
    m("../models/text_unit.dart", "../../core/models/text_unit.dart"),

    // Theme tokens
    m("../core/theme/tokens/color_tokens.dart", "../../../core/theme/tokens/color_tokens.dart"),
    m("../../core/theme/tokens/color_tokens.dart", "../../../core/theme/tokens/color_tokens.dart"),
    m("../theme/tokens/color_tokens.dart", "../../core/theme/tokens/color_tokens.dart"),
    m("../core/theme/tokens/typography_tokens.dart", "../../../core/theme/tokens/typography_tokens.dart"),
    m("../../core/theme/tokens/typography_tokens.dart", "../../../core/theme/tokens/typography_tokens.dart"),
    m("../theme/tokens/typography_tokens.dart", "../../core/theme/tokens/typography_tokens.dart"),
    m("../core/theme/tokens/spacing_tokens.dart", "../../../core/theme/tokens/spacing_tokens.dart"),
    m("../../core/theme/tokens/spacing_tokens.dart", "../../../core/theme/tokens/spacing_tokens.dart"),
    m("../theme/tokens/spacing_tokens.dart", "../../core/theme/tokens/spacing_tokens.dart"),
    m("../core/theme/tokens/ui_tokens.dart", "../../../core/theme/tokens/ui_tokens.dart"),
    m("../../core/theme/tokens/ui_tokens.dart", "../../../core/theme/tokens/ui_tokens.dart"),
    m("../theme/tokens/ui_tokens.dart", "../../core/theme/tokens/ui_tokens.dart"),

    // Services
    m("../../core/services/media/image_service.dart", "../../../core/services/media/image_service.dart"),
    m("../../core/services/common/usage_limit_service.dart", "../../../core/services/common/usage_limit_service.dart"),
    m("../../core/services/text_processing/llm_text_processing.dart", "../../../core/services/text_processing/llm_text_processing.dart"),
    m("../core/services/content/note_service.dart", "../../../core/services/content/note_service.dart"),
    m("../../core/services/content/note_service.dart", "../../../core/services/content/note_service.dart"),
    m("../services/content/note_service.dart", "../../core/services/content/note_service.dart"),
    m("../core/services/content/page_service.dart", "../../../core/services/content/page_service.dart"),
    m("../../core/services/content/page_service.dart", "../../../core/services/content/page_service.dart"),
    m("../services/content/page_service.dart", "../../core/services/content/page_service.dart"),
    m("../core/services/media/image_service.dart", "../../../core/services/media/image_service.dart"),
    m("../services/media/image_service.dart", "../../core/services/media/image_service.dart"),
    m("../media/image_service.dart", "../../core/services/media/image_service.dart"),
    m("../core/services/media/image_cache_service.dart", "../../../core/services/media/image_cache_service.dart"),
    m("../../core/services/media/image_cache_service.dart", "../../../core/services/media/image_cache_service.dart"),
    m("../services/media/image_cache_service.dart", "../../core/services/media/image_cache_service.dart"),
    m("../core/services/tts/tts_service.dart", "../../../core/services/tts/tts_service.dart"),
    m("../../core/services/tts/tts_service.dart", "../../../core/services/tts/tts_service.dart"),
    m("../services/tts/tts_service.dart", "../../core/services/tts/tts_service.dart"),
    m("../core/services/tts/tts_playback_service.dart", "../../../core/services/tts/tts_playback_service.dart"),
    m("../../core/services/tts/tts_playback_service.dart", "../../../core/services/tts/tts_playback_service.dart"),
    m("../services/tts/tts_playback_service.dart", "../../core/services/tts/tts_playback_service.dart"),
    m("../core/services/tts/tts_api_service.dart", "../../../core/services/tts/tts_api_service.dart"),
    m("../../core/services/tts/tts_api_service.dart", "../../../core/services/tts/tts_api_service.dart"),
    m("../services/tts/tts_api_service.dart", "../../core/services/tts/tts_api_service.dart"),
    m("../tts/tts_api_service.dart", "../../core/services/tts/tts_api_service.dart"),
    m("../core/services/dictionary/dictionary_service.dart", "../../../core/services/dictionary/dictionary_service.dart"),
    m("../../core/services/dictionary/dictionary_service.dart", "../../../core/services/dictionary/dictionary_service.dart"),
    m("../services/dictionary/dictionary_service.dart", "../../core/services/dictionary/dictionary_service.dart"),
    m("../core/services/dictionary/cc_cedict_service.dart", "../../../core/services/dictionary/cc_cedict_service.dart"),
    m("../../core/services/dictionary/cc_cedict_service.dart", "../../../core/services/dictionary/cc_cedict_service.dart"),
    m("../services/dictionary/cc_cedict_service.dart", "../../core/services/dictionary/cc_cedict_service.dart"),
    m("../core/services/text_processing/llm_text_processing.dart", "../../../core/services/text_processing/llm_text_processing.dart"),
    m("../services/text_processing/llm_text_processing.dart", "../../core/services/text_processing/llm_text_processing.dart"),
    m("../text_processing/llm_text_processing.dart", "../../core/services/text_processing/llm_text_processing.dart"),
    m("../core/services/text_processing/ocr_service.dart", "../../../core/services/text_processing/ocr_service.dart"),
    m("../../core/services/text_processing/ocr_service.dart", "../../../core/services/text_processing/ocr_service.dart"),
    m("../services/text_processing/ocr_service.dart", "../../core/services/text_processing/ocr_service.dart"),
    m("../text_processing/ocr_service.dart", "../../core/services/text_processing/ocr_service.dart"),
    m("../core/services/common/usage_limit_service.dart", "../../../core/services/common/usage_limit_service.dart"),
    m("../services/common/usage_limit_service.dart", "../../core/services/common/usage_limit_service.dart"),
    m("../common/usage_limit_service.dart", "../../core/services/common/usage_limit_service.dart"),
    m("../core/services/cache/note_cache_service.dart", "../../../core/services/cache/note_cache_service.dart"),
    m("../../core/services/cache/note_cache_service.dart", "../../../core/services/cache/note_cache_service.dart"),
    m("../services/cache/note_cache_service.dart", "../../core/services/cache/note_cache_service.dart"),
    m("../cache/note_cache_service.dart", "../../core/services/cache/note_cache_service.dart"),

    // Shared widgets
    m("../core/widgets/pika_button.dart", "../../../core/widgets/pika_button.dart"),
    m("../../core/widgets/pika_button.dart", "../../../core/widgets/pika_button.dart"),
    m("../widgets/pika_button.dart", "../../core/widgets/pika_button.dart"),
    m("../core/widgets/tts_button.dart", "../../../core/widgets/tts_button.dart"),
    m("../../core/widgets/tts_button.dart", "../../../core/widgets/tts_button.dart"),
    m("../widgets/tts_button.dart", "../../core/widgets/tts_button.dart"),
    m("../core/widgets/dot_loading_indicator.dart", "../../../core/widgets/dot_loading_indicator.dart"),
    m("../../core/widgets/dot_loading_indicator.dart", "../../../core/widgets/dot_loading_indicator.dart"),
    m("../widgets/dot_loading_indicator.dart", "../../core/widgets/dot_loading_indicator.dart"),
    m("../core/widgets/loading_dialog_experience.dart", "../../../core/widgets/loading_dialog_experience.dart"),
    m("../../core/widgets/loading_dialog_experience.dart", "../../../core/widgets/loading_dialog_experience.dart"),
    m("../widgets/loading_dialog_experience.dart", "../../core/widgets/loading_dialog_experience.dart"),

    // Utils
    m("../core/utils/date_formatter.dart", "../../../core/utils/date_formatter.dart"),
    m("../../core/utils/date_formatter.dart", "../../../core/utils/date_formatter.dart"),
    m("../utils/date_formatter.dart", "../../core/utils/date_formatter.dart"),
    m("../core/utils/context_menu_manager.dart", "../../../core/utils/context_menu_manager.dart"),
    m("../../core/utils/context_menu_manager.dart", "../../../core/utils/context_menu_manager.dart"),
    m("../utils/context_menu_manager.dart", "../../core/utils/context_menu_manager.dart"),
    m("../core/utils/segment_utils.dart", "../../../core/utils/segment_utils.dart"),
    m("../../core/utils/segment_utils.dart", "../../../core/utils/segment_utils.dart"),
    m("../utils/segment_utils.dart", "../../core/utils/segment_utils.dart"),

    // Managers
    m("../core/managers/note_creation_ui_manager.dart", "../../../core/managers/note_creation_ui_manager.dart"),
    m("../../core/managers/note_creation_ui_manager.dart", "../../../core/managers/note_creation_ui_manager.dart"),
    m("../managers/note_creation_ui_manager.dart", "../../core/managers/note_creation_ui_manager.dart"),

    // Feature-local widgets
    m("../../widgets/flashcard_counter_badge.dart", "../flashcard/flashcard_counter_badge.dart"),
    m("../widgets/flashcard_counter_badge.dart", "../flashcard/flashcard_counter_badge.dart"),
    m("flashcard_counter_badge.dart", "../flashcard/flashcard_counter_badge.dart"),
    m("../../widgets/note_list_item.dart", "../home/note_list_item.dart"),
    m("../widgets/note_list_item.dart", "../home/note_list_item.dart"),
    m("note_list_item.dart", "../home/note_list_item.dart"),
    m("../../../widgets/edit_title_dialog.dart", "../../../core/widgets/edit_title_dialog.dart"),
    m("../../widgets/edit_title_dialog.dart", "../../core/widgets/edit_title_dialog.dart"),
    m("../widgets/edit_title_dialog.dart", "../../core/widgets/edit_title_dialog.dart"),
    m("../../../widgets/delete_note_dialog.dart", "../../../core/widgets/delete_note_dialog.dart"),
    m("../../widgets/delete_note_dialog.dart", "../../core/widgets/delete_note_dialog.dart"),
    m("../widgets/delete_note_dialog.dart", "../../core/widgets/delete_note_dialog.dart"),
    m("../../../widgets/note_action_bottom_sheet.dart", "../view/note_action_bottom_sheet.dart"),
    m("../../widgets/note_action_bottom_sheet.dart", "../view/note_action_bottom_sheet.dart"),
    m("../widgets/note_action_bottom_sheet.dart", "../view/note_action_bottom_sheet.dart"),
    m("../../widgets/note_progress_bar.dart", "../view/note_progress_bar.dart"),
    m("../widgets/note_progress_bar.dart", "../view/note_progress_bar.dart"),
    m("../../widgets/page_indicator.dart", "../view/page_indicator.dart"),
    m("../widgets/page_indicator.dart", "../view/page_indicator.dart"),
    m("../../widgets/page_navigation_button.dart", "../view/page_navigation_button.dart"),
    m("../widgets/page_navigation_button.dart", "../view/page_navigation_button.dart"),
    m("../../widgets/tts_play_all_button.dart", "../tts/tts_play_all_button.dart"),
    m("../widgets/tts_play_all_button.dart", "../tts/tts_play_all_button.dart"),

    // Screens
    m("../features/flashcard/flashcard_screen.dart", "../flashcard/flashcard_screen.dart"),
    m("../../features/flashcard/flashcard_screen.dart", "../flashcard/flashcard_screen.dart"),
    m("../features/sample/sample_flashcard_screen.dart", "../sample/sample_flashcard_screen.dart"),
    m("../../features/sample/sample_flashcard_screen.dart", "../sample/sample_flashcard_screen.dart"),
    m("../../views/screens/full_image_screen.dart", "../../../views/screens/full_image_screen.dart"),
    m("../views/screens/full_image_screen.dart", "../../views/screens/full_image_screen.dart"),

    // View models
    m("../features/flashcard/flashcard_view_model.dart", "../flashcard/flashcard_view_model.dart"),
    m("../../features/flashcard/flashcard_view_model.dart", "../flashcard/flashcard_view_model.dart"),
    m("../../../features/flashcard/flashcard_view_model.dart", "../flashcard/flashcard_view_model.dart"),

    // App shell
    m("widgets/loading_screen.dart", "views/screens/loading_screen.dart"),
];

/// The built-in mapping table, in application order.
pub fn builtin_mappings() -> &'static [MappingEntry] {
    BUILTIN_MAPPINGS
}
