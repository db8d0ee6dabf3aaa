pub mod codes;
pub mod engine;
pub mod groupkey;
pub mod natural;

pub use codes::{CODE_MARKER, TEMP_MARKER, assign_codes, strip_markers};
pub use engine::{MutationSink, RenumberEngine, SheetSource, SubgroupSelector};
pub use groupkey::{group_key, group_key_at};
pub use natural::natural_cmp;
