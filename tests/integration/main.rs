mod config_test;
mod pipeline_test;
mod source_test;
