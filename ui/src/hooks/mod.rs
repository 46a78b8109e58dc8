pub mod use_alert;
