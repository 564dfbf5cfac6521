mod public_tests;
