// sutra-domain library entry point
pub mod error;
pub mod flow_rule;
pub mod office_hours;
pub mod tat_type;
pub use error::DomainError;
pub use flow_rule::{validate_rule_set, FlowRule, FlowRuleRow};
pub use office_hours::OfficeHours;
pub use tat_type::TatType;
