mod polar_correction;
