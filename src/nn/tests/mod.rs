mod state_dict;
