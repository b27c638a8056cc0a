mod flat_files;
