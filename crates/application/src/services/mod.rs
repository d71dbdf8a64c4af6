mod guard;

pub use guard::guarded_run;
