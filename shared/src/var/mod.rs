pub mod net_var;
pub mod notify_condition;
