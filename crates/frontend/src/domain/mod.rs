pub mod a001_cake;
