mod tests_projections;
