pub mod compound_interest;
