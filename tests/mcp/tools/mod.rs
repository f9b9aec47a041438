mod get_config;
mod show_translation_schema;
mod update_schema;
