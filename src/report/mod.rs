pub mod gc_csv;
