pub mod devotional;
